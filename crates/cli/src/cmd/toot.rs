use super::output::{TootOutput, print_json};
use crate::FileArgs;
use flurnamen_core::config::ResolvedConfig;
use flurnamen_core::content::{ContentError, Post};
use flurnamen_core::toot::{Toot, TootOptions};

pub fn run(cfg: &ResolvedConfig, args: &FileArgs) {
    let post = match Post::load(&args.file) {
        Ok(p) => p,
        Err(ContentError::NotFound(path)) => {
            println!("File {path} does not exist.");
            std::process::exit(1);
        }
        Err(e) => fail(&e),
    };

    let opts = TootOptions {
        alt_text: cfg.toot.alt_text.clone(),
        max_chars: cfg.toot.max_chars,
    };
    let toot = match Toot::compose(&post, &opts) {
        Ok(t) => t,
        Err(e) => fail(&e),
    };

    if args.json {
        print_json(&TootOutput::new(&toot, opts.max_chars));
        return;
    }

    println!("Mastodon Post:");
    println!("{}", toot.text);
    if !toot.thumbnail.is_empty() {
        println!("Thumbnail: {}", toot.thumbnail);
    }
    if !toot.alt_text.is_empty() {
        println!("Alt Text: {}", toot.alt_text);
    }
}

fn fail(e: &ContentError) -> ! {
    println!("FAIL flur toot");
    println!("{e}");
    std::process::exit(1);
}
