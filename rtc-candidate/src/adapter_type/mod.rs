
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the `network-cost` candidate extension.
pub const NETWORK_COST_MAX: u16 = 999;
pub const NETWORK_COST_CELLULAR_2G: u16 = 980;
pub const NETWORK_COST_CELLULAR_3G: u16 = 910;
pub const NETWORK_COST_CELLULAR: u16 = 900;
pub const NETWORK_COST_CELLULAR_4G: u16 = 500;
pub const NETWORK_COST_CELLULAR_5G: u16 = 250;
pub const NETWORK_COST_UNKNOWN: u16 = 50;
pub const NETWORK_COST_LOW: u16 = 10;
pub const NETWORK_COST_MIN: u16 = 0;
pub const NETWORK_COST_VPN: u16 = 1;

/// Kind of local network adapter a candidate was gathered on.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterType {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "ethernet")]
    Ethernet,
    #[serde(rename = "wifi")]
    Wifi,
    #[serde(rename = "cellular")]
    Cellular,
    #[serde(rename = "cellular2g")]
    Cellular2g,
    #[serde(rename = "cellular3g")]
    Cellular3g,
    #[serde(rename = "cellular4g")]
    Cellular4g,
    #[serde(rename = "cellular5g")]
    Cellular5g,
    #[serde(rename = "vpn")]
    Vpn,
    #[serde(rename = "loopback")]
    Loopback,
    /// Wildcard adapter used for the "any address" network.
    #[serde(rename = "any")]
    Any,
}

impl AdapterType {
    pub fn is_cellular(&self) -> bool {
        matches!(
            self,
            Self::Cellular | Self::Cellular2g | Self::Cellular3g | Self::Cellular4g | Self::Cellular5g
        )
    }
}

impl fmt::Display for AdapterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Self::Unknown => "Unknown",
            Self::Ethernet => "Ethernet",
            Self::Wifi => "Wifi",
            Self::Cellular => "Cellular",
            Self::Cellular2g => "Cellular2G",
            Self::Cellular3g => "Cellular3G",
            Self::Cellular4g => "Cellular4G",
            Self::Cellular5g => "Cellular5G",
            Self::Vpn => "VPN",
            Self::Loopback => "Loopback",
            Self::Any => "Wildcard",
        };
        write!(f, "{s}")
    }
}

/// Knobs for `compute_network_cost`.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkCostConfig {
    /// Distinguish 2G/3G/4G/5G instead of charging every cellular network alike.
    pub use_differentiated_cellular_costs: bool,
    /// Charge `NETWORK_COST_VPN` on top of the underlying network's cost.
    pub add_network_cost_to_vpn: bool,
}

fn cost_by_type(adapter_type: AdapterType, config: &NetworkCostConfig) -> u32 {
    let cellular = |differentiated: u16| {
        if config.use_differentiated_cellular_costs {
            differentiated
        } else {
            NETWORK_COST_CELLULAR
        }
    };
    u32::from(match adapter_type {
        AdapterType::Ethernet | AdapterType::Loopback => NETWORK_COST_MIN,
        AdapterType::Wifi => NETWORK_COST_LOW,
        AdapterType::Cellular => NETWORK_COST_CELLULAR,
        AdapterType::Cellular2g => cellular(NETWORK_COST_CELLULAR_2G),
        AdapterType::Cellular3g => cellular(NETWORK_COST_CELLULAR_3G),
        AdapterType::Cellular4g => cellular(NETWORK_COST_CELLULAR_4G),
        AdapterType::Cellular5g => cellular(NETWORK_COST_CELLULAR_5G),
        AdapterType::Any => NETWORK_COST_MAX,
        AdapterType::Unknown | AdapterType::Vpn => NETWORK_COST_UNKNOWN,
    })
}

/// Computes the network cost advertised for a candidate gathered on
/// `adapter_type`. A VPN is costed by the adapter it runs over. The result
/// never exceeds `NETWORK_COST_MAX`.
pub fn compute_network_cost(
    adapter_type: AdapterType,
    underlying_type_for_vpn: AdapterType,
    config: &NetworkCostConfig,
) -> u16 {
    let (effective, is_vpn) = if adapter_type == AdapterType::Vpn {
        (underlying_type_for_vpn, true)
    } else {
        (adapter_type, false)
    };

    let vpn_cost = if is_vpn && config.add_network_cost_to_vpn {
        u32::from(NETWORK_COST_VPN)
    } else {
        0
    };

    let cost = cost_by_type(effective, config) + vpn_cost;
    if cost > u32::from(NETWORK_COST_MAX) {
        log::debug!("network cost {cost} for {adapter_type} clamped to {NETWORK_COST_MAX}");
    }
    cost.min(u32::from(NETWORK_COST_MAX)) as u16
}
