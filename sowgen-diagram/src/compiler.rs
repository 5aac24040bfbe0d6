//! Deterministic spec-to-graph compiler.
//!
//! Three ordered layers: client/UI, orchestration (cloud boundary), AI & data
//! services. Edge wiring follows a fixed priority and labelled edges carry
//! contiguous step numbers reflecting the actual call sequence.

use crate::graph::{Cluster, Edge, GraphDescription, Node};
use crate::spec::ArchitectureSpec;

struct StepCounter(u32);

impl StepCounter {
    fn next(&mut self, verb: &str) -> String {
        self.0 += 1;
        format!("{}. {}", self.0, verb)
    }
}

/// Pure function: the same spec always yields the same graph. A spec with no
/// optional fields degenerates to the UI -> orchestrator -> model chain and
/// never errors.
pub fn compile(spec: &ArchitectureSpec) -> GraphDescription {
    let mut graph = GraphDescription::default();

    let client_layer = Cluster::new(0, "Client / User Layer")
        .attr("style", "dashed,rounded")
        .attr("color", "#cbd5e1")
        .attr("fontname", "Arial Bold")
        .node(
            Node::new("UI", format!("Interface\n({})", spec.ui_type()))
                .attr("fillcolor", "#3b82f6")
                .attr("fontcolor", "white"),
        );
    graph.clusters.push(client_layer);

    let framework = spec.agent_framework_label();
    let mut cloud_layer = Cluster::new(1, "AWS Cloud (VPC)")
        .attr("style", "rounded")
        .attr("bgcolor", "#f8fafc")
        .attr("color", "#FF9900")
        .attr("fontname", "Arial Bold")
        .node(
            Node::new("ORCH", format!("Orchestrator\n({})", spec.orchestrator()))
                .attr("fillcolor", "#10b981")
                .attr("fontcolor", "white"),
        );
    if let Some(fw) = &framework {
        cloud_layer = cloud_layer.node(
            Node::new("FRAMEWORK", format!("LLM Framework\n({fw})"))
                .attr("fillcolor", "#8b5cf6")
                .attr("fontcolor", "white"),
        );
    }
    if let Some(db) = spec.databases_label() {
        cloud_layer = cloud_layer.node(
            Node::new("DB", format!("Database\n({db})"))
                .attr("fillcolor", "#64748b")
                .attr("fontcolor", "white"),
        );
    }
    graph.clusters.push(cloud_layer);

    let vector_store = spec.vector_store_name().map(str::to_string);
    let data_sources = spec.data_sources_label();
    let mut ai_layer = Cluster::new(2, "AI & Data Services")
        .attr("style", "rounded")
        .attr("color", "#232F3E")
        .attr("fontname", "Arial Bold")
        .node(
            Node::new("LLM", format!("{}\n({})", spec.llm_provider(), spec.model_family()))
                .attr("fillcolor", "#FF9900")
                .attr("fontcolor", "white"),
        );
    if let Some(vs) = &vector_store {
        ai_layer = ai_layer
            .node(
                Node::new("VS", format!("Vector Store\n({vs})"))
                    .attr("fillcolor", "#64748b")
                    .attr("fontcolor", "white"),
            )
            .node(
                Node::new("EMB", format!("Embeddings\n({})", spec.embeddings_provider()))
                    .attr("fillcolor", "#64748b")
                    .attr("fontcolor", "white"),
            );
    }
    if let Some(sources) = &data_sources {
        ai_layer = ai_layer.node(
            Node::new("DATA", format!("Data Sources\n({sources})"))
                .attr("fillcolor", "#64748b")
                .attr("fontcolor", "white"),
        );
    }
    graph.clusters.push(ai_layer);

    // Wiring, in call order so step numbers stay contiguous.
    let mut steps = StepCounter(0);
    let core = if framework.is_some() { "FRAMEWORK" } else { "ORCH" };

    graph.edges.push(Edge::new("UI", "ORCH").label(steps.next("Request")));
    if framework.is_some() {
        graph.edges.push(Edge::new("ORCH", "FRAMEWORK").label(steps.next("Process")));
    }
    if vector_store.is_some() {
        graph.edges.push(Edge::new("ORCH", "EMB").label(steps.next("Vectorize")));
        graph.edges.push(Edge::new("EMB", "VS").label(steps.next("Search")));
        if data_sources.is_some() {
            graph.edges.push(Edge::new("DATA", "VS").attr("style", "dotted"));
        }
        graph.edges.push(Edge::new("VS", "ORCH").label(steps.next("Context")));
    }
    graph.edges.push(Edge::new(core, "LLM").label(steps.next("Query")));
    if vector_store.is_some() {
        graph
            .edges
            .push(Edge::new("LLM", "UI").label(steps.next("Response")).attr("constraint", "false"));
    }
    if spec.databases_label().is_some() {
        graph.edges.push(Edge::new("ORCH", "DB"));
    }

    graph
}
