use super::output::{PostOutput, print_json};
use crate::FileArgs;
use flurnamen_core::content::{ContentError, Post};

pub fn run(args: &FileArgs) {
    let post = match Post::load(&args.file) {
        Ok(p) => p,
        Err(ContentError::NotFound(path)) => {
            println!("File {path} does not exist.");
            std::process::exit(1);
        }
        Err(e) => {
            println!("FAIL flur split");
            println!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        print_json(&PostOutput::from(&post));
        return;
    }

    println!("title: {}", post.title());
    println!("thumbnail: {}", post.thumbnail());
    for (i, p) in post.paragraphs.iter().enumerate() {
        println!("[{i}] {p}");
    }
    println!("-- {} paragraphs --", post.paragraphs.len());
}
