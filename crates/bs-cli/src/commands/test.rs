use std::io::{self, BufRead, Write};
use std::path::Path;

use bs_screening::{Answer, ScreeningConfig, Session, SessionReport};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>, seed: Option<u64>, plates: usize, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;
    let seed = seed.unwrap_or_else(rand::random);
    let config = ScreeningConfig::default()
        .with_seed(seed)
        .with_plates_per_type(plates);

    let mut session = Session::from_config(&catalog, &config)
        .map_err(|e| format!("failed to start session: {e}"))?;
    log::info!("starting session {} (seed {seed})", session.id());

    // Keep stdout clean for the JSON report.
    let mut prompts: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    writeln!(prompts, "  {} Colorblindness Screening", "Starting".bold())
        .map_err(|e| e.to_string())?;
    writeln!(
        prompts,
        "  {} plates | Seed: {seed}\n  Enter 1-4 to pick what you see, 'none' if you see none, 'quit' to stop.\n",
        session.len()
    )
    .map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let completed = drive(&mut session, &mut stdin.lock(), &mut prompts)?;
    if !completed {
        writeln!(
            prompts,
            "  Test stopped after {}/{} plates; no result.",
            session.progress(),
            session.len()
        )
        .map_err(|e| e.to_string())?;
        return Ok(());
    }

    let report = SessionReport::from_session(&session).map_err(|e| e.to_string())?;
    if json {
        println!("{}", report.to_json().map_err(|e| e.to_string())?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Present plates until the session completes. Returns false if the user
/// quit or input ran out first.
fn drive(session: &mut Session, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool, String> {
    let mut line = String::new();

    while let Some((index, plate)) = session.next_plate() {
        let options = plate.answer_options().to_vec();
        writeln!(
            out,
            "  [{}/{}] {}: {}",
            session.progress() + 1,
            session.len(),
            plate.test_type(),
            plate.image()
        )
        .map_err(|e| e.to_string())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "    {}) {option}", i + 1).map_err(|e| e.to_string())?;
        }

        let answer = loop {
            write!(out, "> ").map_err(|e| e.to_string())?;
            out.flush().map_err(|e| e.to_string())?;

            line.clear();
            if input.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
                return Ok(false); // EOF
            }
            let choice = line.trim();
            if choice.eq_ignore_ascii_case("quit") || choice.eq_ignore_ascii_case("q") {
                return Ok(false);
            }
            match parse_choice(choice, &options) {
                Ok(answer) => break answer,
                Err(msg) => writeln!(out, "{}", msg.yellow()).map_err(|e| e.to_string())?,
            }
        };

        session
            .record_answer(index, answer)
            .map_err(|e| e.to_string())?;
        let stats = session.stats();
        writeln!(
            out,
            "  Correct: {} · Wrong: {}\n",
            stats.total_correct(),
            stats.total_incorrect()
        )
        .map_err(|e| e.to_string())?;
    }

    Ok(true)
}

/// Map user input to one of the offered options: a 1-based position, or
/// `none` for the "none of these" option.
fn parse_choice(input: &str, options: &[Answer]) -> Result<Answer, String> {
    let usage = || format!("enter 1-{} or 'none'", options.len());

    if let Ok(pos) = input.parse::<usize>() {
        return match pos.checked_sub(1).and_then(|i| options.get(i)) {
            Some(answer) => Ok(*answer),
            None => Err(usage()),
        };
    }
    match Answer::parse(input) {
        Ok(Answer::NoneOfThese) if options.contains(&Answer::NoneOfThese) => {
            Ok(Answer::NoneOfThese)
        }
        _ => Err(usage()),
    }
}

fn print_report(report: &SessionReport) {
    println!("  {}\n", "Results".bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Test type", "Correct", "Error rate", "Result"]);
    for score in &report.scores {
        table.add_row(vec![
            score.test_type.to_string(),
            format!("{}/{}", score.correct, score.total),
            format!("{:.0}%", score.error_rate * 100.0),
            if score.flagged { "flagged" } else { "ok" }.to_string(),
        ]);
    }
    println!("{table}");
    println!(
        "  Total: {}/{}\n",
        report.total_correct, report.total_plates
    );

    if report.diagnosis.is_clear() {
        println!(
            "  {} no indication of color vision deficiency",
            "Result:".green().bold()
        );
    } else {
        for finding in &report.findings {
            match finding.condition {
                Some(info) => {
                    println!(
                        "  {} possible {} ({})",
                        "Result:".red().bold(),
                        info.name.bold(),
                        info.affects
                    );
                    println!("  {}", info.description);
                    println!(
                        "  Compare: {} vs {}\n",
                        info.normal_image, info.affected_image
                    );
                }
                None => println!(
                    "  {} possible {}\n",
                    "Result:".red().bold(),
                    finding.test_type
                ),
            }
        }
    }
    println!("  {}", report.advice);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bs_screening::PlateCatalog;

    use super::*;

    const OPTIONS: [Answer; 4] = [
        Answer::Number(12),
        Answer::NoneOfThese,
        Answer::Number(3),
        Answer::Number(70),
    ];

    fn session() -> Session {
        Session::from_config(&PlateCatalog::builtin(), &ScreeningConfig::default()).unwrap()
    }

    #[test]
    fn choice_by_position() {
        assert_eq!(parse_choice("1", &OPTIONS), Ok(Answer::Number(12)));
        assert_eq!(parse_choice("4", &OPTIONS), Ok(Answer::Number(70)));
    }

    #[test]
    fn choice_none() {
        assert_eq!(parse_choice("none", &OPTIONS), Ok(Answer::NoneOfThese));
        assert_eq!(parse_choice("NONE", &OPTIONS), Ok(Answer::NoneOfThese));
    }

    #[test]
    fn choice_out_of_range() {
        assert!(parse_choice("0", &OPTIONS).is_err());
        assert!(parse_choice("5", &OPTIONS).is_err());
        assert!(parse_choice("twelve", &OPTIONS).is_err());
    }

    #[test]
    fn drive_to_completion() {
        let mut s = session();
        let mut input = Cursor::new("1\n".repeat(30));
        let mut out = Vec::new();
        assert!(drive(&mut s, &mut input, &mut out).unwrap());
        assert!(s.is_complete());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[30/30]"));
    }

    #[test]
    fn drive_reprompts_on_bad_input() {
        let mut s = session();
        let mut input = Cursor::new("9\nnone\nquit\n");
        let mut out = Vec::new();
        assert!(!drive(&mut s, &mut input, &mut out).unwrap());
        assert_eq!(s.progress(), 1);
        assert!(String::from_utf8(out).unwrap().contains("enter 1-4"));
    }

    #[test]
    fn drive_stops_at_eof() {
        let mut s = session();
        let mut input = Cursor::new("2\n2\n");
        let mut out = Vec::new();
        assert!(!drive(&mut s, &mut input, &mut out).unwrap());
        assert_eq!(s.progress(), 2);
    }
}
