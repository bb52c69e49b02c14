mod client;

pub(crate) use client::{
    make_dumb_caller, make_error_response_caller, make_fixed_response_caller, make_recording_caller,
};
