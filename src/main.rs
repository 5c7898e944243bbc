fn main() {
    if let Err(err) = mxpanel_rs::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
