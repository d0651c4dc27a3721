use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    api::{error::ApiError, AppState},
    dispatch::plan_production,
    domain::{PlanEntry, PlanRequest},
};

/// POST /productionplan - Compute the production plan for one request
///
/// The payload is validated at this boundary (negative load, non-positive
/// efficiency, inverted power bands, out-of-range wind percentage and
/// duplicate unit names are rejected with 400); the dispatch core assumes
/// well-formed data.
pub async fn create_production_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<Vec<PlanEntry>>, ApiError> {
    request.validate()?;

    tracing::info!(
        load_mw = request.load,
        units = request.powerplants.len(),
        "computing production plan"
    );

    let entries = plan_production(&request, state.cfg.dispatch.tolerance_mw);
    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use crate::domain::{PlanEntry, PlanRequest};
    use validator::Validate;

    #[test]
    fn plan_entry_serializes_to_name_and_p() {
        let entry = PlanEntry {
            name: "windpark1".to_string(),
            p: 90.0,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"name": "windpark1", "p": 90.0}));
    }

    #[test]
    fn full_payload_deserializes() {
        let json = r#"{
            "load": 480,
            "fuels": {
                "gas(euro/MWh)": 13.4,
                "kerosine(euro/MWh)": 50.8,
                "co2(euro/ton)": 20,
                "wind(%)": 60
            },
            "powerplants": [
                {"name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
                {"name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150}
            ]
        }"#;
        let request: PlanRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.load, 480.0);
        assert_eq!(request.powerplants.len(), 2);
    }
}
