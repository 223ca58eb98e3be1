//! Fleet dashboard snapshot.
//!
//! Reduces the fleet collections into the four dashboard views (KPI cards,
//! node table, per-cluster load chart, top tenants) and assembles them into
//! one immutable [`DashboardSnapshot`]. Everything here is a pure function
//! of [`SnapshotInput`]; callers are responsible for fetching the data.

use std::collections::HashMap;

use serde::Serialize;

use crate::fleet::{ClusterInfo, MeetingTotals, NodeSample, TenantUsage};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of rows in the top-tenants table.
pub const TOP_TENANT_LIMIT: usize = 10;

/// Chart colour of the raw CPU load series (purple-600).
pub const CPU_LOAD_COLOR: &str = "#9333ea";

/// Chart colour of the computed load series (blue-600).
pub const COMPUTED_LOAD_COLOR: &str = "#2563eb";

const DATASET_BORDER_WIDTH: u32 = 1;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Everything the aggregation reads, fetched by the caller.
///
/// `clusters` and `nodes` are expected in display order; the aggregation
/// keeps whatever order it is given. The two lists may be read at slightly
/// different times, so a node can reference a cluster missing from
/// `clusters`.
#[derive(Debug, Clone, Default)]
pub struct SnapshotInput {
    pub clusters: Vec<ClusterInfo>,
    pub nodes: Vec<NodeSample>,
    pub total_tenants: i64,
    /// Per-tenant usage. May be pre-ranked by the store; ranking is applied
    /// again here so the table invariants hold for any source.
    pub tenant_usage: Vec<TenantUsage>,
    pub meetings: MeetingTotals,
    /// Recording jobs still in the processing queue.
    pub recordings_processing: i64,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Headline value of a KPI card: a plain count or a pre-formatted composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KpiMetric {
    Count(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: String,
    pub metric: KpiMetric,
    pub footer: String,
    pub icon: String,
}

/// One row of the node table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRow {
    pub name: String,
    pub cluster: String,
    pub status: String,
    pub status_color: String,
    pub attendees: i32,
    pub meetings: i32,
    pub cpu_load: i32,
    pub computed_load: f64,
    pub domain: String,
}

/// One row of the top-tenants table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantRow {
    pub name: String,
    pub meetings: i64,
    pub attendees: i64,
}

/// A single chart series with its display styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

/// Labels plus datasets aligned index-by-index with them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub cluster_load: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardTables {
    pub nodes: Vec<NodeRow>,
    pub tenants: Vec<TenantRow>,
}

/// The complete dashboard view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Active Meetings, Infrastructure, Tenants, Recordings Queue.
    pub kpi: [KpiCard; 4],
    pub charts: DashboardCharts,
    pub tables: DashboardTables,
    /// Raw KPI numbers behind the cards. Not part of the wire format.
    #[serde(skip)]
    pub totals: FleetKpis,
}

// ---------------------------------------------------------------------------
// A. Fleet KPIs
// ---------------------------------------------------------------------------

/// Fleet-wide counters.
///
/// `maintenance_nodes` and `error_nodes` overlap: a node with both flags set
/// is counted in each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetKpis {
    pub total_clusters: i64,
    pub total_nodes: i64,
    pub active_nodes: i64,
    pub maintenance_nodes: i64,
    pub error_nodes: i64,
    pub total_tenants: i64,
    pub total_meetings: i64,
    pub total_attendees: i64,
    pub total_videos: i64,
    pub total_voice: i64,
    pub recordings_processing: i64,
}

pub fn compute_kpis(input: &SnapshotInput) -> FleetKpis {
    let count_nodes = |pred: fn(&NodeSample) -> bool| -> i64 {
        input.nodes.iter().filter(|n| pred(n)).count() as i64
    };

    FleetKpis {
        total_clusters: input.clusters.len() as i64,
        total_nodes: input.nodes.len() as i64,
        active_nodes: count_nodes(NodeSample::is_active),
        maintenance_nodes: count_nodes(|n| n.maintenance),
        error_nodes: count_nodes(|n| n.has_errors),
        total_tenants: input.total_tenants,
        total_meetings: input.meetings.meetings,
        total_attendees: input.meetings.attendees,
        total_videos: input.meetings.videos,
        total_voice: input.meetings.voice,
        recordings_processing: input.recordings_processing,
    }
}

// ---------------------------------------------------------------------------
// B. Node table
// ---------------------------------------------------------------------------

/// Build one table row per node, in input order.
pub fn build_node_rows(nodes: &[NodeSample]) -> Vec<NodeRow> {
    nodes
        .iter()
        .map(|node| {
            let status = node.status();

            NodeRow {
                name: node.slug.clone(),
                cluster: node.cluster_name.clone(),
                status: status.label().to_string(),
                status_color: status.color().to_string(),
                attendees: node.attendees,
                meetings: node.meetings,
                cpu_load: node.cpu_load,
                computed_load: node.load(),
                domain: node.domain.clone(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// C. Cluster load series
// ---------------------------------------------------------------------------

/// Per-cluster load sums, index-aligned with `labels`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterLoadSeries {
    pub labels: Vec<String>,
    pub cpu_load: Vec<f64>,
    pub computed_load: Vec<f64>,
}

/// Sum raw and computed load per cluster.
///
/// Nodes are grouped by cluster id; the name is only used as the label.
/// Clusters without nodes get zero in both series. Nodes of clusters not in
/// `clusters` are left out.
pub fn cluster_load_series(clusters: &[ClusterInfo], nodes: &[NodeSample]) -> ClusterLoadSeries {
    let mut sums: HashMap<DbId, (i64, f64)> = HashMap::with_capacity(clusters.len());
    for node in nodes {
        let entry = sums.entry(node.cluster_id).or_default();
        entry.0 += i64::from(node.cpu_load);
        entry.1 += node.load();
    }

    let mut series = ClusterLoadSeries::default();
    for cluster in clusters {
        let (cpu, computed) = sums.get(&cluster.id).copied().unwrap_or_default();
        series.labels.push(cluster.name.clone());
        series.cpu_load.push(cpu as f64);
        series.computed_load.push(computed);
    }
    series
}

fn dataset(label: &str, data: Vec<f64>, color: &str) -> ChartDataset {
    ChartDataset {
        label: label.to_string(),
        data,
        background_color: color.to_string(),
        border_color: color.to_string(),
        border_width: DATASET_BORDER_WIDTH,
    }
}

impl From<ClusterLoadSeries> for ChartData {
    fn from(series: ClusterLoadSeries) -> Self {
        ChartData {
            labels: series.labels,
            datasets: vec![
                dataset("CPU Load", series.cpu_load, CPU_LOAD_COLOR),
                dataset("Computed Load", series.computed_load, COMPUTED_LOAD_COLOR),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// D. Top tenants
// ---------------------------------------------------------------------------

/// Keep tenants with at least one meeting, highest attendee count first,
/// at most `limit` of them.
///
/// Equal attendee counts are ordered by slug so the result does not depend
/// on the order the store returned rows in.
pub fn rank_top_tenants(usage: Vec<TenantUsage>, limit: usize) -> Vec<TenantUsage> {
    let mut ranked: Vec<TenantUsage> = usage
        .into_iter()
        .filter(|t| t.active_meetings > 0)
        .collect();
    ranked.sort_by(|a, b| {
        b.active_attendees
            .cmp(&a.active_attendees)
            .then_with(|| a.slug.cmp(&b.slug))
    });
    ranked.truncate(limit);
    ranked
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn card(title: &str, metric: KpiMetric, footer: String, icon: &str) -> KpiCard {
    KpiCard {
        title: title.to_string(),
        metric,
        footer,
        icon: icon.to_string(),
    }
}

/// The four KPI cards, in display order.
pub fn kpi_cards(kpis: &FleetKpis, active_tenants: usize) -> [KpiCard; 4] {
    [
        card(
            "Active Meetings",
            KpiMetric::Count(kpis.total_meetings),
            format!(
                "{} Attendees | {} Videos",
                kpis.total_attendees, kpis.total_videos
            ),
            "monitor",
        ),
        card(
            "Infrastructure",
            KpiMetric::Text(format!("{} / {}", kpis.active_nodes, kpis.total_nodes)),
            format!(
                "{} Clusters | {} Errors",
                kpis.total_clusters, kpis.error_nodes
            ),
            "server",
        ),
        card(
            "Tenants",
            KpiMetric::Count(kpis.total_tenants),
            format!("{active_tenants} Active Now"),
            "people",
        ),
        card(
            "Recordings Queue",
            KpiMetric::Count(kpis.recordings_processing),
            "Processing".to_string(),
            "film",
        ),
    ]
}

/// Run all four sub-computations and assemble the snapshot.
pub fn build_snapshot(input: SnapshotInput) -> DashboardSnapshot {
    let totals = compute_kpis(&input);
    let nodes = build_node_rows(&input.nodes);
    let cluster_load = cluster_load_series(&input.clusters, &input.nodes).into();

    let tenants: Vec<TenantRow> = rank_top_tenants(input.tenant_usage, TOP_TENANT_LIMIT)
        .into_iter()
        .map(|t| TenantRow {
            name: t.slug,
            meetings: t.active_meetings,
            attendees: t.active_attendees,
        })
        .collect();

    DashboardSnapshot {
        kpi: kpi_cards(&totals, tenants.len()),
        charts: DashboardCharts { cluster_load },
        tables: DashboardTables { nodes, tenants },
        totals,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
