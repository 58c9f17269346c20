use repscan_core::error::RepscanError;
use repscan_core::lexicon::builtin::lexicon;
use repscan_core::model::{DetectedLanguage, IntensityLevel};

pub fn list() -> Result<(), RepscanError> {
    println!("Supported languages:\n");
    for language in DetectedLanguage::ALL {
        let lex = lexicon(language);
        println!(
            "  {:<3} {:<10} day: {:<6} intensity: {} / {} / {} / {}",
            language.code(),
            language.to_string(),
            lex.day_prefix,
            lex.label(IntensityLevel::Easy),
            lex.label(IntensityLevel::Medium),
            lex.label(IntensityLevel::Hard),
            lex.label(IntensityLevel::Rest),
        );
    }
    Ok(())
}
