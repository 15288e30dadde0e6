mod entry;
mod logger;
mod shutdown_handlers;
mod summary;

use trafficgen::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
