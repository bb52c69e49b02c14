mod request_call;

pub(super) use request_call::request_call;
