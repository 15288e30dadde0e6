use clap::Parser;

use crate::error::{AppError, AppResult};

use super::TrafficArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<TrafficArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TrafficArgs::try_parse_from(args).map_err(AppError::from)
}
