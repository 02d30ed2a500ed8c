use crate::CheckArgs;
use flurnamen_core::config::ResolvedConfig;
use flurnamen_core::spellcheck::{CheckError, SubstitutionCorrector, check_file};

pub fn run(cfg: &ResolvedConfig, args: &CheckArgs) {
    let corrector =
        SubstitutionCorrector::for_language(&cfg.language, &cfg.spellcheck.replacements);

    let report = match check_file(&args.file, &corrector, args.dry_run) {
        Ok(r) => r,
        Err(CheckError::NotFound(path)) => {
            println!("File {path} does not exist.");
            std::process::exit(1);
        }
        Err(e) => {
            println!("FAIL flur check");
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("OK   flur check");
    println!("checked lines: {}", report.checked);
    if report.is_clean() {
        println!("(no corrections)");
        return;
    }
    for change in &report.changes {
        println!("{:>4} - {}", change.line, change.before);
        println!("{:>4} + {}", change.line, change.after);
    }
    let verb = if args.dry_run { "would correct" } else { "corrected" };
    println!("-- {verb} {} lines --", report.changes.len());
}
