//! StageFlight Editor.
//!
//! Kurven-Engine für Avatar-Flugpfade zwischen festen Bühnenplätzen.
//! Lädt optional eine Segmentliste aus JSON, führt Platz-Wechsel und
//! Glättung über den Command-Dispatch aus und gibt die Kurvenparameter
//! als Textblock auf stdout aus.

use anyhow::Context;
use stage_flight_editor::shared::approx_segment_length;
use stage_flight_editor::{
    export_curve_text, parse_segments_json, CurveSegment, EditorCommand, EditorController,
    EditorOptions, EditorState, SeatRing, SmoothingPlan,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "StageFlight Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args = CliArgs::parse(std::env::args().skip(1))?;

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut controller = EditorController::new();
    let mut state = EditorState::with_seats(SeatRing::standard_nine(), options);
    let plan = args.plan.unwrap_or(state.options.default_plan);

    match args.segments_file {
        Some(ref path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Segmentdatei {} nicht lesbar", path))?;
            let segments = parse_segments_json(&json)
                .with_context(|| format!("Segmentdatei {} nicht importierbar", path))?;
            controller.handle_command(&mut state, EditorCommand::ImportSegments { segments })?;
        }
        None => {
            log::info!("Keine Segmentdatei angegeben, Demo-Segment wird geladen");
            controller.handle_command(
                &mut state,
                EditorCommand::AddSegment {
                    segment: CurveSegment::sample(),
                },
            )?;
        }
    }

    if let Some(index) = args.seat {
        controller.handle_command(&mut state, EditorCommand::SetActiveSeat { index, plan })?;
    }

    if args.smooth {
        controller.handle_command(&mut state, EditorCommand::SmoothPath { plan })?;
    }

    let total_length: f32 = state
        .view_path
        .iter()
        .map(|segment| approx_segment_length(segment, state.options.curve_samples))
        .sum();
    log::info!(
        "Pfad: {} Segmente, Dauer {:.1} s, Länge ≈ {:.2}",
        state.view_path.len(),
        state.view_path.total_duration(),
        total_length
    );

    print!("{}", export_curve_text(&state.view_path));
    Ok(())
}

/// Kommandozeilen-Argumente.
///
/// `stage-flight-editor [segmente.json] [--seat N] [--plan full|joins] [--smooth]`
struct CliArgs {
    segments_file: Option<String>,
    seat: Option<usize>,
    plan: Option<SmoothingPlan>,
    smooth: bool,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self {
            segments_file: None,
            seat: None,
            plan: None,
            smooth: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seat" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--seat braucht einen Platz-Index"))?;
                    let index = value
                        .parse()
                        .with_context(|| format!("Platz-Index '{}' ist keine Zahl", value))?;
                    parsed.seat = Some(index);
                }
                "--plan" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--plan braucht 'full' oder 'joins'"))?;
                    parsed.plan = Some(match value.as_str() {
                        "full" => SmoothingPlan::FullPath,
                        "joins" => SmoothingPlan::JoinsOnly,
                        other => anyhow::bail!("Unbekannter Glättungsplan '{}'", other),
                    });
                }
                "--smooth" => parsed.smooth = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                path if !path.starts_with('-') => parsed.segments_file = Some(path.to_string()),
                other => anyhow::bail!("Unbekanntes Argument '{}'", other),
            }
        }

        Ok(parsed)
    }
}

fn print_usage() {
    println!("StageFlight Editor v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Aufruf: stage-flight-editor [segmente.json] [Optionen]");
    println!();
    println!("Optionen:");
    println!("  --seat N            Aktiven Bühnenplatz wechseln (0-8)");
    println!("  --plan full|joins   Glättungsplan wählen");
    println!("  --smooth            Pfad glätten und zurückschreiben");
    println!("  -h, --help          Diese Hilfe anzeigen");
}
