//! shiftsplit main entrypoint.

use shiftsplit::run;
use shiftsplit::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
