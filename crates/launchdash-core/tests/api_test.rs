use launchdash_core::api::{Dashboard, DASHBOARD_HEADING};
use launchdash_core::chart::EMPTY_RANGE_MESSAGE;
use launchdash_core::config::DashboardConfig;
use launchdash_core::error::DashError;
use launchdash_core::query::{QueryParams, SiteSelector};
use std::sync::Arc;
use std::thread;

fn dashboard() -> Dashboard {
    let path = format!(
        "{}/../../data/spacex_launch_dash.csv",
        env!("CARGO_MANIFEST_DIR")
    );
    Dashboard::load(path, DashboardConfig::default()).unwrap()
}

#[test]
fn test_controls_describe_dataset() {
    let dash = dashboard();
    let controls = dash.controls();

    assert_eq!(controls.heading, DASHBOARD_HEADING);
    assert_eq!(controls.default_site, "ALL");
    let values: Vec<&str> = controls
        .site_options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(
        values,
        vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert_eq!(controls.site_options[0].label, "All Sites");

    assert_eq!(controls.payload.min, 0.0);
    assert_eq!(controls.payload.max, 10000.0);
    assert_eq!(controls.payload.step, 1000.0);
    assert_eq!(controls.payload.default_range, (0.0, 9600.0));
    assert_eq!(controls.dataset_fingerprint, dash.dataset().fingerprint());
}

#[test]
fn test_default_query_renders_both_figures() {
    let dash = dashboard();
    let figures = dash.render(&dash.default_query()).unwrap();

    assert_eq!(figures.pie.title(), "Total Success Launches By Site");
    let scatter = figures.scatter.as_scatter().unwrap();
    assert_eq!(scatter.point_count(), 56);
    assert_eq!(
        scatter.title,
        "Correlation between Payload and Success for all Sites (0 kg to 9600 kg)"
    );
}

#[test]
fn test_render_surfaces_invalid_range() {
    let dash = dashboard();
    let params = QueryParams::new("KSC LC-39A", 8000.0, 2000.0);
    assert!(matches!(
        dash.render(&params),
        Err(DashError::InvalidRange { .. })
    ));
}

#[test]
fn test_custom_padding_reaches_scatter_axis() {
    let path = format!(
        "{}/../../data/spacex_launch_dash.csv",
        env!("CARGO_MANIFEST_DIR")
    );
    let config = DashboardConfig {
        axis_padding_kg: 500.0,
        ..Default::default()
    };
    let dash = Dashboard::load(path, config).unwrap();
    let chart = dash.scatter_chart(&SiteSelector::All, (1000.0, 2000.0)).unwrap();
    assert_eq!(chart.as_scatter().unwrap().x_axis.range, (500.0, 2500.0));
}

#[test]
fn test_invalid_config_is_rejected_before_loading() {
    let config = DashboardConfig {
        jitter_std_dev: f64::NAN,
        ..Default::default()
    };
    let err = Dashboard::load("missing.csv", config).unwrap_err();
    assert!(matches!(err, DashError::Config(_)));
    assert!(!err.is_load_failure());

    let err = Dashboard::load("missing.csv", DashboardConfig::default()).unwrap_err();
    assert!(err.is_load_failure());
}

#[test]
fn test_load_keeps_the_given_config() {
    let path = format!(
        "{}/../../data/spacex_launch_dash.csv",
        env!("CARGO_MANIFEST_DIR")
    );
    let config = DashboardConfig {
        jitter_seed: 42,
        axis_padding_kg: 250.0,
        ..Default::default()
    };
    let dash = Dashboard::load(path, config.clone()).unwrap();
    assert_eq!(dash.config(), &config);
    assert_eq!(dash.dataset().len(), 56);
}

#[test]
fn test_sessions_share_dataset_across_threads() {
    let dash = Arc::new(dashboard());

    let handles: Vec<_> = ["ALL", "KSC LC-39A", "VAFB SLC-4E", "Nowhere"]
        .into_iter()
        .map(|site| {
            let dash = Arc::clone(&dash);
            thread::spawn(move || {
                let params = QueryParams::new(site, 9000.0, 9001.0);
                dash.render(&params).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let figures = handle.join().unwrap();
        let scatter = figures.scatter.as_scatter().unwrap();
        assert!(scatter.series.is_empty());
        assert_eq!(scatter.annotations[0].text, EMPTY_RANGE_MESSAGE);
    }
}
