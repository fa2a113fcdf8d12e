/// Holding cost assumed per excess unit when a scenario does not set one.
pub const DEFAULT_UNIT_PRICE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub stages: Vec<String>,
    pub base_demand: f64,
    pub demand_spike_pct: f64,
    pub safety_buffer_pct: f64,
    pub unit_price: f64,
}

impl Scenario {
    pub fn default_stages() -> Vec<String> {
        ["Customer", "Pharmacy", "Wholesaler", "Distributor", "Factory"]
            .iter()
            .map(|stage| stage.to_string())
            .collect()
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            name: "default".to_string(),
            stages: Scenario::default_stages(),
            base_demand: 100.0,
            demand_spike_pct: 10.0,
            safety_buffer_pct: 20.0,
            unit_price: DEFAULT_UNIT_PRICE,
        }
    }
}

/// Command-line overrides applied on top of a loaded scenario.
#[derive(Debug, Clone, Default)]
pub struct ScenarioOverrides {
    pub base_demand: Option<f64>,
    pub demand_spike_pct: Option<f64>,
    pub safety_buffer_pct: Option<f64>,
    pub unit_price: Option<f64>,
}

impl ScenarioOverrides {
    pub fn apply(&self, scenario: &mut Scenario) {
        if let Some(value) = self.base_demand {
            scenario.base_demand = value;
        }
        if let Some(value) = self.demand_spike_pct {
            scenario.demand_spike_pct = value;
        }
        if let Some(value) = self.safety_buffer_pct {
            scenario.safety_buffer_pct = value;
        }
        if let Some(value) = self.unit_price {
            scenario.unit_price = value;
        }
    }
}
