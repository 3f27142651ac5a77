use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::serde_json_adapter::{read_payload_file, write_response_file};
use crate::usecase::calculate::calculate_path;
use crate::usecase::event::AppEvent;
use crate::usecase::inspect::inspect_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::ItineraryCalculate {
            input,
            output,
            emit_events,
        } => {
            let payload = read_payload_file(&input)
                .await
                .with_context(|| format!("reading edges JSON: {input}"))?;

            let (sink, printer) = if emit_events {
                let (tx, rx) = mpsc::channel::<AppEvent>(1024);
                (Some(tx), Some(spawn_ndjson_printer(rx)))
            } else {
                (None, None)
            };

            let outcome = calculate_path(&payload, sink).await;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            match output.as_deref() {
                Some(path) => write_response_file(path, &outcome.response)
                    .await
                    .with_context(|| format!("writing response JSON: {path}"))?,
                None => println!("{}", serde_json::to_string(&outcome.response)?),
            }

            eprintln!(
                "summary: edges_seen={} vertices={} heads={} tails={} operation={}",
                outcome.stats.edges_seen,
                outcome.stats.vertices,
                outcome.stats.heads,
                outcome.stats.tails,
                outcome.response.operation()
            );

            if !outcome.response.is_complete() {
                return Err(anyhow!(
                    "calculation finished with {} (status {})",
                    outcome.response.operation(),
                    outcome.response.status_code()
                ));
            }
            Ok(())
        }

        Cli::ItineraryInspect { input } => {
            let payload = read_payload_file(&input)
                .await
                .with_context(|| format!("reading edges JSON: {input}"))?;

            let (graph, report) =
                inspect_graph(&payload).with_context(|| format!("inspecting edges: {input}"))?;

            graph.print_graph();
            println!("heads: [{}]", report.heads.join(", "));
            println!("tails: [{}]", report.tails.join(", "));
            for (comp, cyclic) in report
                .components
                .iter()
                .zip(report.cyclic_components.iter())
            {
                let kind = if *cyclic { "cyclic" } else { "acyclic" };
                println!("scc: [{}] {kind}", comp.join(", "));
            }
            println!("strongly connected: {}", report.strongly_connected);

            eprintln!(
                "summary: vertices={} edges={} components={}",
                report.vertices,
                report.edges,
                report.components.len()
            );
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    ItineraryCalculate {
        input: String,
        output: Option<String>,
        emit_events: bool,
    },
    ItineraryInspect {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> itinerary calculate --in/--input <edges.json> [--out/--output <response.json>] [--emit-events]
        // <bin> itinerary inspect --in/--input <edges.json>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "itinerary" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "calculate" => Self::parse_calculate(args),
            "inspect" => Self::parse_inspect(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_calculate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::ItineraryCalculate {
            input,
            output,
            emit_events,
        })
    }

    fn parse_inspect(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::ItineraryInspect { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  itinerary calculate --in/--input <edges.json> [--out/--output <response.json>] [--emit-events]\n  itinerary inspect --in/--input <edges.json>\n\nInput:\n  {\"edges\": [[\"SFO\", \"ATL\"], [\"ATL\", \"EWR\"]]}\n\nOutput:\n  calculate writes the response envelope to --out, or to stdout when omitted.\n  It exits non-zero unless the operation is Complete.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr."
}
