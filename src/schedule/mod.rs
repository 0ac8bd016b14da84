use zino::prelude::*;

mod account;
mod job;

pub fn job_scheduler() -> JobScheduler {
    let mut scheduler = JobScheduler::new();

    let heartbeat = Job::new("0/30 * * * * *", job::log_live_feed)
        .name("log_live_feed")
        .data(Map::new());
    scheduler.add(heartbeat);

    scheduler
}

pub fn async_job_scheduler() -> AsyncJobScheduler {
    let mut scheduler = AsyncJobScheduler::new();

    let initial_account = AsyncJob::new("0 0 * * * *", account::create_initial_account)
        .name("create_initial_account")
        .immediate(true)
        .once();
    scheduler.add(initial_account);

    let purge_events = AsyncJob::new("0 30 2 * * *", job::purge_click_events)
        .name("purge_click_events")
        .data(Map::new());
    scheduler.add(purge_events);

    scheduler
}
