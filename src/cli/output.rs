//! Output formatting for CLI commands.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{BhashaArgs, OutputFormat};
use crate::error::Result;
use crate::language::{LanguageKind, LanguageProfile};
use crate::pipeline::PipelineResult;

/// Summary of a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub index: u32,
    pub id: String,
    pub name: String,
    pub locale: Option<String>,
    pub case_folding: bool,
    pub suffixes: Vec<String>,
    pub stop_words: usize,
    pub stemmer: String,
    pub lemmatizer: String,
}

impl From<&LanguageProfile> for LanguageSummary {
    fn from(profile: &LanguageProfile) -> Self {
        LanguageSummary {
            index: profile.display_index(),
            id: profile.id().to_string(),
            name: profile.name().to_string(),
            locale: profile.locale_code().map(str::to_string),
            case_folding: profile.supports_case_folding(),
            suffixes: profile.suffix_list().to_vec(),
            stop_words: profile.stop_filter().len(),
            stemmer: profile.stem_filter().stemmer().name().to_string(),
            lemmatizer: match profile.kind() {
                LanguageKind::English => profile.lemmatizer().name().to_string(),
                LanguageKind::SuffixRule { locale } => {
                    format!("{} ({locale})", profile.lemmatizer().name())
                }
            },
        }
    }
}

/// Output one pipeline result in the selected format.
pub fn output_result(result: &PipelineResult, args: &BhashaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_result(result));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output batch results in the selected format.
pub fn output_batch(results: &[PipelineResult], args: &BhashaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("Line {}", i + 1);
                println!("─────────────");
                print!("{}", render_result(result));
            }
            Ok(())
        }
        OutputFormat::Json => output_json(&results, args),
    }
}

/// Output the language list in the selected format.
pub fn output_languages(languages: &[LanguageSummary], args: &BhashaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_languages(languages));
            Ok(())
        }
        OutputFormat::Json => output_json(&languages, args),
    }
}

fn output_json<T: Serialize + ?Sized>(result: &T, args: &BhashaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Human-readable rendering of a pipeline result.
pub fn render_result(result: &PipelineResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Language:             {}", result.language);
    let _ = writeln!(out, "Tokens:               {}", format_list(&result.tokens));
    let _ = writeln!(out, "Case:                 {}", result.case_variants);
    let _ = writeln!(out, "Punctuation removed:  {}", result.punctuation_filtered);
    let _ = writeln!(out, "Stopwords removed:    {}", result.stopwords_filtered);
    let _ = writeln!(out, "Stems:                {}", format_list(&result.stems));
    let _ = writeln!(out, "Lemmas:               {}", format_list(&result.lemmas));
    out
}

/// Human-readable table of languages.
pub fn render_languages(languages: &[LanguageSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Supported Languages:");
    let _ = writeln!(out, "════════════════════");

    for language in languages {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {} ({})", language.index, language.name, language.id);
        if let Some(locale) = &language.locale {
            let _ = writeln!(out, "   Locale:       {locale}");
        }
        let _ = writeln!(
            out,
            "   Case folding: {}",
            if language.case_folding { "yes" } else { "no" }
        );
        if !language.suffixes.is_empty() {
            let _ = writeln!(out, "   Suffixes:     {}", language.suffixes.join(", "));
        }
        let _ = writeln!(out, "   Stopwords:    {}", language.stop_words);
        let _ = writeln!(out, "   Stemmer:      {}", language.stemmer);
        let _ = writeln!(out, "   Lemmatizer:   {}", language.lemmatizer);
    }
    out
}

fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
