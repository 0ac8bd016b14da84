mod controller;
mod middleware;
mod model;
mod router;
mod schedule;
mod service;

use zino::prelude::Application;

fn main() {
    zino::Cluster::boot()
        .register(router::routes())
        .spawn(schedule::job_scheduler())
        .run_with(schedule::async_job_scheduler())
}
