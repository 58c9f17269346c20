use repscan_core::detect::{classify_format, score_languages};
use repscan_core::error::RepscanError;
use repscan_core::extraction::read_input;
use std::path::Path;

pub fn run(input_file: &Path) -> Result<(), RepscanError> {
    let text = read_input(input_file)?;
    let scores = score_languages(&text);

    println!("Language: {} ({})", scores.detected, scores.detected.code());
    println!("Format:   {}", classify_format(&text));
    println!(
        "Training days: {}",
        if repscan_core::has_training_days(&text) {
            "yes"
        } else {
            "no"
        }
    );
    println!("Nordic diacritics: {}\n", scores.diacritics);

    let mut ranked = scores.scores.clone();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    println!("Scores:");
    for (language, score) in ranked {
        println!("  {:<10} {:>6.1}", language.to_string(), score);
    }
    Ok(())
}
