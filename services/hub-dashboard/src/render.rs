//! Dashboard rendering
//!
//! Turns a sensor inventory snapshot into the complete dashboard document.
//! Every call produces the whole page, so repeated renders can never
//! accumulate stale fragments.

use crate::sensor::{status_label, SensorInventory};

fn sensor_fragment(name: &str, ip: &str, mode: i64) -> String {
    format!(
        r#"<div class="ui stacked segment">
<h1>{name}</h1>
<p>IP: {ip}<br>Status: {status}</p>
<a href="/{name}/eventsview" class="ui icon button">Events</a>
<a href="/{name}/streamview" class="ui icon button">Stream</a>
<form method="post" action="/api/sensor/{name}?mode=0" class="mode-control"><button class="ui right floated button">Standby</button></form>
<form method="post" action="/api/sensor/{name}?mode=1" class="mode-control"><button class="ui right floated button">Sense</button></form>
<form method="post" action="/api/sensor/{name}?mode=2" class="mode-control"><button class="ui right floated button">Stream</button></form>
</div>"#,
        name = name,
        ip = ip,
        status = status_label(mode),
    )
}

/// Render the complete dashboard page for a fleet snapshot
pub fn dashboard_page(inventory: &SensorInventory) -> String {
    let fragments: String = inventory
        .sensors
        .iter()
        .map(|(name, record)| sensor_fragment(name, &record.ip, record.mode))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sensor Dashboard</title>
</head>
<body>
<h1>Sensors</h1>
<div id="outer">
{fragments}
</div>
<div class="fleet-controls">
<form method="post" action="/api/sensor/all?mode=0"><button class="ui button">All Standby</button></form>
<form method="post" action="/api/sensor/all?mode=1"><button class="ui button">All Sense</button></form>
<form method="post" action="/api/sensor/all?mode=2"><button class="ui button">All Stream</button></form>
</div>
</body>
</html>"#,
        fragments = fragments
    )
}
