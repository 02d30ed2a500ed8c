use crate::StubArgs;
use chrono::Local;
use flurnamen_core::config::ResolvedConfig;
use flurnamen_core::stub::Stub;
use tracing::debug;

pub fn run(cfg: &ResolvedConfig, args: &StubArgs) {
    let url = args.url.clone().unwrap_or_else(|| cfg.default_url.clone());
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let dir = args.dir.clone().unwrap_or_else(|| cfg.posts_dir.clone());
    debug!(flurname = %args.flurname, %url, dir = %dir.display(), "creating stub");

    let result = Stub::new(args.flurname.as_str(), url, date)
        .and_then(|stub| stub.write(&dir, args.force));

    match result {
        Ok(path) => println!("Stub created at {}", path.display()),
        Err(e) => {
            println!("FAIL flur stub");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
