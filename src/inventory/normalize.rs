use serde_json::Value;
use tracing::debug;

use super::catalog::{payload_key, LibraryCatalog, NOT_INSTALLED};
use super::InventoryPayload;
use crate::types::DisplayRow;

/// Fallback for absent name/version-like scalars
pub const UNKNOWN: &str = "Unknown";
/// GPU row value when CUDA is unavailable or unreported
pub const NO_GPU: &str = "No GPU available";
/// Text a composite shows for an absent sub-field
pub const UNDEFINED: &str = "undefined";

// -- Row labels --
pub const LABEL_PYTHON: &str = "Python version";
pub const LABEL_OS: &str = "Operating System";
pub const LABEL_CPU: &str = "CPU";
pub const LABEL_CPU_CORES: &str = "CPU Cores";
pub const LABEL_CPU_USAGE: &str = "CPU Usage";
pub const LABEL_RAM: &str = "System RAM";
pub const LABEL_GPU: &str = "GPU";
pub const LABEL_PYTORCH: &str = "PyTorch";

/// Turn a payload into the panel's rows.
///
/// Never fails: every slot gets a row, absent data is replaced by a fallback
/// literal or an `undefined` placeholder. Order is fixed by the slot list and
/// `catalog`, never by the payload.
///
/// A row is flagged `missing` when a library resolves to `"Not installed"`, or
/// when a field with a whole-row fallback is absent from the payload. A field
/// that is present but empty (`cuda.available: false`, `""`) still gets the
/// fallback text, without the flag.
pub fn normalize(
    payload: &InventoryPayload,
    catalog: &LibraryCatalog,
    include_runtime_row: bool,
) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(8 + catalog.len());

    rows.push(fallback_row(
        LABEL_PYTHON,
        payload.get("python_version"),
        UNKNOWN,
    ));
    rows.push(DisplayRow::new(
        LABEL_OS,
        format!(
            "{} {}",
            display(payload.field("os", "system")),
            display(payload.field("os", "release"))
        ),
    ));
    rows.push(fallback_row(LABEL_CPU, payload.field("cpu", "brand"), UNKNOWN));
    rows.push(DisplayRow::new(LABEL_CPU_CORES, core_breakdown(payload)));
    rows.push(DisplayRow::new(
        LABEL_CPU_USAGE,
        format!("{}%", display(payload.field("cpu", "usage"))),
    ));
    rows.push(DisplayRow::new(
        LABEL_RAM,
        format!(
            "{}GB ({}GB available)",
            display(payload.get("system_ram_gb")),
            display(payload.field("memory", "available"))
        ),
    ));
    rows.push(gpu_row(payload));

    if include_runtime_row {
        rows.push(fallback_row(
            LABEL_PYTORCH,
            payload.field("pytorch", "version"),
            UNKNOWN,
        ));
    }

    for library in catalog.iter() {
        let version = or_fallback(payload.get(&payload_key(library)), NOT_INSTALLED);
        if version == NOT_INSTALLED {
            rows.push(DisplayRow::missing(library, version));
        } else {
            rows.push(DisplayRow::new(library, version));
        }
    }

    debug!(
        rows = rows.len(),
        missing = rows.iter().filter(|r| r.missing).count(),
        "normalized inventory"
    );
    rows
}

/// `"{physical}P + {logical - physical}L = {logical}T"`, unvalidated
fn core_breakdown(payload: &InventoryPayload) -> String {
    let physical = payload.field("cpu", "physical_cores");
    let logical = payload.field("cpu", "logical_cores");
    let logical_only = match (logical.and_then(as_number), physical.and_then(as_number)) {
        (Some(l), Some(p)) => format_number(l - p),
        _ => format_number(f64::NAN),
    };
    format!(
        "{}P + {}L = {}T",
        display(physical),
        logical_only,
        display(logical)
    )
}

fn gpu_row(payload: &InventoryPayload) -> DisplayRow {
    match payload.field("cuda", "available") {
        None => DisplayRow::missing(LABEL_GPU, NO_GPU),
        Some(available) if !truthy(available) => DisplayRow::new(LABEL_GPU, NO_GPU),
        Some(_) => DisplayRow::new(
            LABEL_GPU,
            format!(
                "{} {}GB (SM {})",
                display(payload.field("gpu", "name")),
                display(payload.field("cuda", "vram_gb")),
                display(payload.field("gpu", "capability"))
            ),
        ),
    }
}

/// Scalar row with a literal fallback; only an absent field is `missing`
fn fallback_row(label: &str, value: Option<&Value>, fallback: &str) -> DisplayRow {
    match value {
        None => DisplayRow::missing(label, fallback),
        Some(_) => DisplayRow::new(label, or_fallback(value, fallback)),
    }
}

/// Text for a value interpolated into a row
fn display(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format_number(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Value if it is present and non-empty, `fallback` otherwise
fn or_fallback(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(v) if truthy(v) => display(Some(v)),
        _ => fallback.to_string(),
    }
}

/// Empty-ish values (`null`, `false`, `0`, `""`) count as absent
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric coercion for the core arithmetic: `null`, `false` and blank
/// strings count as 0, `true` as 1
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse().ok(),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral values print without a fraction (`16.0` → `16`)
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Map};

    /// Every optional field of a full payload, addressed as (group, key)
    const FIELDS: [(&str, Option<&str>); 16] = [
        ("python_version", None),
        ("os", Some("system")),
        ("os", Some("release")),
        ("cpu", Some("brand")),
        ("cpu", Some("physical_cores")),
        ("cpu", Some("logical_cores")),
        ("cpu", Some("usage")),
        ("system_ram_gb", None),
        ("memory", Some("available")),
        ("gpu", Some("name")),
        ("gpu", Some("capability")),
        ("cuda", Some("available")),
        ("cuda", Some("vram_gb")),
        ("pytorch", Some("version")),
        ("numpy_version", None),
        ("triton_version", None),
    ];

    fn sample(group: &str, key: Option<&str>) -> Value {
        match (group, key) {
            ("cuda", Some("available")) => json!(true),
            ("cpu", Some(_)) | ("cuda", Some(_)) | ("memory", Some(_)) | ("system_ram_gb", _) => {
                json!(8)
            }
            _ => json!("x"),
        }
    }

    fn build(mask: &[bool]) -> InventoryPayload {
        let mut map = Map::new();
        for ((group, key), keep) in FIELDS.iter().zip(mask) {
            if !keep {
                continue;
            }
            match key {
                None => {
                    map.insert(group.to_string(), sample(group, None));
                }
                Some(key) => {
                    let entry = map
                        .entry(group.to_string())
                        .or_insert_with(|| Value::Object(Map::new()));
                    if let Value::Object(inner) = entry {
                        inner.insert(key.to_string(), sample(group, Some(key)));
                    }
                }
            }
        }
        InventoryPayload::from(map)
    }

    proptest! {
        #[test]
        fn every_slot_present(mask in proptest::collection::vec(any::<bool>(), FIELDS.len()), runtime in any::<bool>()) {
            let catalog = LibraryCatalog::default();
            let rows = normalize(&build(&mask), &catalog, runtime);
            let fixed = if runtime { 8 } else { 7 };
            prop_assert_eq!(rows.len(), fixed + catalog.len());
            for (row, lib) in rows[fixed..].iter().zip(catalog.iter()) {
                prop_assert_eq!(row.label.as_str(), lib);
                prop_assert_eq!(row.missing, row.value == NOT_INSTALLED);
            }
        }

        #[test]
        fn order_ignores_key_order(mask in proptest::collection::vec(any::<bool>(), FIELDS.len())) {
            let forward = build(&mask);
            let mut reversed = Map::new();
            for (k, v) in forward.as_map().iter().rev() {
                reversed.insert(k.clone(), v.clone());
            }
            let catalog = LibraryCatalog::default();
            prop_assert_eq!(
                normalize(&forward, &catalog, true),
                normalize(&InventoryPayload::from(reversed), &catalog, true)
            );
        }
    }
}
