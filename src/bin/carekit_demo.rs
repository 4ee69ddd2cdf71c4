use anyhow::{Context, Result};
use carekit::analytics::{AnalyticsConfig, MedicalDataAnalyzer, PatientData};
use carekit::{Graph, ShortestPaths};
use chrono::NaiveDate;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SAMPLE_PATIENT: &str = include_str!("../../demos/sample_patient.json");

#[derive(Parser)]
#[command(name = "carekit-demo")]
#[command(about = "Patient-portal analytics and clinic routing demo", long_about = None)]
struct Cli {
    /// Patient data JSON (vitals and appointments); built-in sample if omitted
    #[arg(long)]
    sample: Option<PathBuf>,

    /// Analytics thresholds JSON; defaults if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Day the trend window ends on (YYYY-MM-DD); latest vitals date if omitted
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalyticsConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AnalyticsConfig::default(),
    };

    let data: PatientData = match &cli.sample {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content).context("Failed to parse patient data")?
        }
        None => serde_json::from_str(SAMPLE_PATIENT).context("Built-in sample is malformed")?,
    };

    let today = cli
        .today
        .or_else(|| data.vitals.iter().map(|v| v.date).max())
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    tracing::info!(%today, "running analytics");

    let analyzer = MedicalDataAnalyzer::with_data(config, data);
    let routes = clinic_routes()?;

    if cli.json {
        print_json(&analyzer, today, &routes)
    } else {
        print_report(&analyzer, today, &routes);
        Ok(())
    }
}

/// Walking times in minutes between clinic departments, routed from the front desk.
fn clinic_routes() -> Result<ShortestPaths<&'static str, u32>> {
    let departments = [
        "Reception",
        "Triage",
        "Laboratory",
        "Radiology",
        "Cardiology",
        "Pharmacy",
        "Isolation Ward",
    ];
    let corridors = [
        ("Reception", "Triage", 2),
        ("Triage", "Laboratory", 4),
        ("Triage", "Radiology", 6),
        ("Laboratory", "Radiology", 1),
        ("Radiology", "Cardiology", 3),
        ("Reception", "Pharmacy", 7),
        ("Laboratory", "Pharmacy", 2),
    ];

    let mut graph = Graph::with_capacity(departments.len());
    for department in departments {
        graph.add_node(department);
    }
    for (a, b, minutes) in corridors {
        graph
            .add_edge(&a, &b, minutes)
            .with_context(|| format!("Failed to connect {a} and {b}"))?;
    }
    graph.dijkstra(&"Reception").context("Routing failed")
}

fn print_report(analyzer: &MedicalDataAnalyzer, today: NaiveDate, routes: &ShortestPaths<&str, u32>) {
    let trends = analyzer.vitals_trends(today);
    println!("Vitals trends (window ending {today}):");
    println!("  heart rate: {:?} ({:+.3}/reading)", trends.heart_rate.direction, trends.heart_rate.slope);
    println!("  weight:     {:?} ({:+.3}/reading)", trends.weight.direction, trends.weight.slope);
    println!("  bmi:        {:?} ({:+.3}/reading)", trends.bmi.direction, trends.bmi.slope);

    println!("\nHealth risk: {}", analyzer.predict_health_risk());
    let alerts = analyzer.latest_alerts();
    if alerts.is_empty() {
        println!("No alerts on the latest vitals");
    } else {
        for alert in alerts {
            println!("  warning: {alert}");
        }
    }

    let stats = analyzer.appointment_stats();
    println!(
        "\nAppointments: {} total, {} completed, {} scheduled, {} cancelled ({:.1}% completed)",
        stats.total, stats.completed, stats.scheduled, stats.cancelled, stats.completion_rate
    );
    println!("Triage order:");
    for (i, appointment) in analyzer.triage().enumerate() {
        println!(
            "  {}. {} {} {:<20} [{:?}]",
            i + 1,
            appointment.date,
            appointment.time,
            appointment.doctor,
            appointment.priority
        );
    }

    println!("\nRoutes from {}:", routes.source());
    let mut targets: Vec<_> = routes.distances().keys().copied().collect();
    targets.sort_unstable();
    for target in targets {
        let distance = routes.distance(&target).map_or_else(String::new, |d| d.to_string());
        match routes.path_to(&target) {
            Some(path) => println!("  {target:<15} {distance:>3} min  via {}", path.join(" -> ")),
            None => println!("  {target:<15} {distance:>3}      unreachable"),
        }
    }
}

fn print_json(
    analyzer: &MedicalDataAnalyzer,
    today: NaiveDate,
    routes: &ShortestPaths<&str, u32>,
) -> Result<()> {
    let report = serde_json::json!({
        "today": today,
        "trends": analyzer.vitals_trends(today),
        "risk": analyzer.predict_health_risk(),
        "alerts": analyzer.latest_alerts(),
        "appointment_stats": analyzer.appointment_stats(),
        "triage": analyzer.triage().collect::<Vec<_>>(),
        "routes": routes,
    });
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
