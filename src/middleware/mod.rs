mod access;

pub(crate) use access::init_user_session;
