use crate::domain::graph::DirectedGraph;
use crate::infrastructure::schema_validator::validate_calculate_request;
use crate::infrastructure::serde_json_adapter::{
    CalculateRequestDto, CalculateResponse, DebugDto, ErrorBodyDto,
};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::CalculateStats;
use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc;

pub const INVALID_PAYLOAD_MESSAGE: &str =
    "Invalid Payload. Expected [[str,str],...] like: [[A, B], [D, E], [B, C]]";

#[derive(Debug, Clone)]
pub struct CalculateOutcome {
    pub response: CalculateResponse,
    pub stats: CalculateStats,
}

/// Schema-check the payload and decode it.
pub fn parse_request(payload: &Value) -> Result<CalculateRequestDto> {
    validate_calculate_request(payload)?;
    let dto = CalculateRequestDto::deserialize(payload)?;
    Ok(dto)
}

/// Resolve the single start and end of the itinerary described by `payload`.
///
/// Never fails: malformed payloads, rejected vertices and ambiguous graphs
/// all come back as envelope variants.
pub async fn calculate_path(
    payload: &Value,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> CalculateOutcome {
    let mut stats = CalculateStats::default();

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "validate_payload".into(),
        },
    )
    .await;
    let request = match parse_request(payload) {
        Ok(request) => request,
        Err(_) => {
            let response = CalculateResponse::ClientError {
                error: ErrorBodyDto {
                    message: INVALID_PAYLOAD_MESSAGE.to_string(),
                    debug: None,
                },
            };
            return finish(&sink, response, stats).await;
        }
    };
    stats.edges_seen = request.edges.len();
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "validate_payload".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let graph = match DirectedGraph::from_edges(request.label_pairs()) {
        Ok(graph) => graph,
        Err(err) => {
            let response = CalculateResponse::ServerError {
                error: ErrorBodyDto {
                    message: err.to_string(),
                    debug: None,
                },
            };
            return finish(&sink, response, stats).await;
        }
    };
    stats.vertices = graph.vertex_count();
    stats.edges = graph.edge_count();
    emit(
        &sink,
        AppEvent::GraphBuilt {
            vertices: stats.vertices,
            edges: stats.edges,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "resolve_endpoints".into(),
        },
    )
    .await;
    if sink.is_some() {
        let scc = graph.scc_report();
        emit(
            &sink,
            AppEvent::SccComputed {
                vertices: stats.vertices,
                edges: stats.edges,
                components: scc.components.len(),
                cyclic_components: scc.cyclic_count(),
            },
        )
        .await;
    }
    let heads = graph.find_heads();
    let tails = graph.find_tails();
    stats.heads = heads.len();
    stats.tails = tails.len();
    emit(
        &sink,
        AppEvent::EndpointsResolved {
            heads: heads.clone(),
            tails: tails.clone(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "resolve_endpoints".into(),
        },
    )
    .await;

    let response = if heads.len() == 1 && tails.len() == 1 {
        CalculateResponse::Complete {
            path: [heads[0].clone(), tails[0].clone()],
        }
    } else {
        CalculateResponse::ClientError {
            error: ErrorBodyDto {
                message: format!(
                    "Unexpected count of Heads ({} != 1) or Tails ({} != 1)",
                    heads.len(),
                    tails.len()
                ),
                debug: Some(DebugDto {
                    heads,
                    tails,
                    graph: graph.to_string(),
                }),
            },
        }
    };

    finish(&sink, response, stats).await
}

async fn finish(
    sink: &Option<mpsc::Sender<AppEvent>>,
    response: CalculateResponse,
    stats: CalculateStats,
) -> CalculateOutcome {
    emit(
        sink,
        AppEvent::Finished {
            operation: response.operation().to_string(),
            stats: stats.clone(),
        },
    )
    .await;
    CalculateOutcome { response, stats }
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
