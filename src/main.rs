use std::process;

fn main() {
    if let Err(err) = quartet::cli::run() {
        eprintln!("quartet: {err:#}");
        process::exit(1);
    }
}
