use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphBuilt { vertices, edges } => {
            json!({"type":"graph_built","vertices":vertices,"edges":edges})
        }
        AppEvent::SccComputed {
            vertices,
            edges,
            components,
            cyclic_components,
        } => {
            json!({"type":"scc_computed","vertices":vertices,"edges":edges,"components":components,"cyclic_components":cyclic_components})
        }
        AppEvent::EndpointsResolved { heads, tails } => {
            json!({"type":"endpoints_resolved","heads":heads,"tails":tails})
        }
        AppEvent::Finished { operation, stats } => {
            json!({"type":"finished","operation":operation,"stats":stats})
        }
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
