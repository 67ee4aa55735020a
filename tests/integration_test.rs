use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Hotspot {
    lat: f64,
    lon: f64,
    radius: f64,
    crime_count: usize,
    severity: String,
}

#[derive(Debug, Deserialize)]
struct RiskPrediction {
    area: String,
    risk_score: f64,
    level: String,
}

#[derive(Debug, Deserialize)]
struct PatrolAssignment {
    id: u32,
    hotspots: Vec<Hotspot>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct LiveCrime {
    id: u32,
    timestamp: String,
    crime_type: String,
    lat: f64,
    lon: f64,
    area: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PoliceStation {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct Stats {
    total_crimes: usize,
    high_risk_zones: usize,
    live_alerts: usize,
    prediction_accuracy: u32,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    hotspots: Vec<Hotspot>,
    predictions: Vec<RiskPrediction>,
    patrols: Vec<PatrolAssignment>,
    live_crimes: Vec<LiveCrime>,
    police_stations: Vec<PoliceStation>,
    stats: Stats,
}

#[derive(Debug, Deserialize)]
struct UpdateResponse {
    new_crimes: Vec<LiveCrime>,
    timestamp: String,
}

fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into())
}

#[tokio::test]
async fn dashboard_endpoint_shape_ok() -> Result<()> {
    // ---
    let url = format!("{}/api/data", base_url());

    let client = Client::new();
    let data: DashboardResponse = client.get(&url).send().await?.json().await?;

    // 1) Predictions cover the fixed area list, scores bounded
    let areas: Vec<&str> = data.predictions.iter().map(|p| p.area.as_str()).collect();
    assert_eq!(areas, vec!["Dadar", "Andheri", "Bandra", "Kurla"]);
    for p in &data.predictions {
        assert!(
            (0.0..=1.0).contains(&p.risk_score),
            "{} has risk_score {} outside [0, 1]",
            p.area,
            p.risk_score
        );
        assert!(matches!(p.level.as_str(), "Low" | "Medium" | "High"));
    }

    // 2) Hotspot invariants: severity threshold and size-scaled radius
    for h in &data.hotspots {
        assert!(h.crime_count >= 1);
        let expected = if h.crime_count > 10 { "High" } else { "Medium" };
        assert_eq!(h.severity, expected);
        assert!((h.radius - 0.002 * h.crime_count as f64).abs() < 1e-9);
        // Service area is greater Mumbai
        assert!((18.0..20.0).contains(&h.lat), "hotspot lat {}", h.lat);
        assert!((72.0..74.0).contains(&h.lon), "hotspot lon {}", h.lon);
    }

    // 3) Patrols: default cap of 3, single-hotspot routes, ranked descending
    assert!(data.patrols.len() <= 3);
    assert!(data.patrols.len() <= data.hotspots.len());
    for (i, patrol) in data.patrols.iter().enumerate() {
        assert_eq!(patrol.id, i as u32 + 1, "patrol ids are 1-based sequential");
        assert_eq!(patrol.hotspots.len(), 1);
        assert_eq!(patrol.status, "Active");
    }
    for pair in data.patrols.windows(2) {
        assert!(pair[0].hotspots[0].crime_count >= pair[1].hotspots[0].crime_count);
    }

    // 4) Live alerts: bounded snapshot, fixed status, 4-digit ids
    assert!(data.live_crimes.len() <= 10);
    for crime in &data.live_crimes {
        assert_eq!(crime.status, "Just Reported");
        assert!((1000..=9999).contains(&crime.id));
        assert!(!crime.area.is_empty());
        assert!(!crime.crime_type.is_empty());
        assert_eq!(crime.timestamp.len(), 5, "timestamp should be HH:MM");
        assert!((18.0..20.0).contains(&crime.lat));
        assert!((72.0..74.0).contains(&crime.lon));
    }

    // 5) Stats are consistent with the payload they summarize
    let high = data
        .hotspots
        .iter()
        .filter(|h| h.severity == "High")
        .count();
    assert_eq!(data.stats.high_risk_zones, high);
    assert_eq!(data.stats.live_alerts, data.live_crimes.len());
    assert!(data.stats.total_crimes >= data.hotspots.iter().map(|h| h.crime_count).sum());
    // Hardcoded placeholder, not a measurement
    assert_eq!(data.stats.prediction_accuracy, 87);

    // 6) Static reference data
    assert_eq!(data.police_stations.len(), 5);
    for station in &data.police_stations {
        assert!(station.name.ends_with("PS"));
        assert!((18.0..20.0).contains(&station.lat));
        assert!((72.0..74.0).contains(&station.lon));
    }

    Ok(())
}

#[tokio::test]
async fn patrol_count_parameter_respected() -> Result<()> {
    // ---
    let client = Client::new();

    let url = format!("{}/api/data?patrols=1", base_url());
    let data: DashboardResponse = client.get(&url).send().await?.json().await?;
    assert!(data.patrols.len() <= 1);

    // Requesting more patrols than hotspots exist caps at the hotspot count
    let url = format!("{}/api/data?patrols=1000", base_url());
    let data: DashboardResponse = client.get(&url).send().await?.json().await?;
    assert_eq!(data.patrols.len(), data.hotspots.len());

    Ok(())
}

#[tokio::test]
async fn update_endpoint_returns_fresh_snapshot() -> Result<()> {
    // ---
    let url = format!("{}/api/update", base_url());

    let client = Client::new();
    let update: UpdateResponse = client.get(&url).send().await?.json().await?;

    assert!(update.new_crimes.len() <= 10);
    for crime in &update.new_crimes {
        assert_eq!(crime.status, "Just Reported");
    }

    // "HH:MM:SS"
    assert_eq!(update.timestamp.len(), 8);
    assert_eq!(update.timestamp.matches(':').count(), 2);

    Ok(())
}
