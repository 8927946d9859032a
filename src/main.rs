use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = day1::INPUT_PATH;

    let stdout = io::stdout();
    day1::run(path, &mut stdout.lock())
}
