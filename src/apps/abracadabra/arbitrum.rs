//! Abracadabra Money constants for the Arbitrum deployment
//!
//! Role-keyed contract addresses and derived scalars consumed by the cauldron
//! and staking fetchers. Incorrect entries are a data-quality issue; nothing
//! here validates against the chain.

use alloy_primitives::{address, Address};

// ============================================================================
// CAULDRONS
// ============================================================================

/// Collateralized-debt cauldrons live on Arbitrum
pub const ARBITRUM_CAULDRONS: [Address; 3] = [
    address!("0xc89958b03a55b5de2221acb25b58b89a000215e6"), // WETH
    address!("0x5698135ca439f21a57bddbe8b582c62f090406d5"), // GLP
    address!("0x726413d7402ff180609d0ebc79506df8633701b1"), // magicGLP
];

// ============================================================================
// STAKING AND FARMS
// ============================================================================

/// Curve MIM-3Pool gauge farm
pub const CURVE_MIM_3POOL_FARM: Address = address!("0x839de324a1ab773f76a53900d70ac1b913d2b387");

/// mSPELL staking contract
pub const M_SPELL_ADDRESS: Address = address!("0x1df188958a8674b5177f77667b8d173c3cdd9e51");

/// sSPELL staking token (same deployment as the SPELL role below)
pub const S_SPELL_ADDRESS: Address = address!("0xf7428ffcb2581a2804998efbb036a43255c8a8d3");

/// SPELL token as bridged to Arbitrum
pub const SPELL_ADDRESS: Address = address!("0xf7428ffcb2581a2804998efbb036a43255c8a8d3");

// ============================================================================
// MAGIC GLP
// ============================================================================

/// magicGLP auto-compounding vault token
pub const MAGIC_GLP_ADDRESS: Address = address!("0x85667409a723684fe1e57dd1abde8d88c2f54214");

/// GMX reward trackers the vault harvests from
pub const GLP_REWARD_TRACKER_ADDRESSES: [Address; 2] = [
    address!("0x4e971a87900b931ff39d1aad67697f49835400b6"),
    address!("0x1addd80e6039594ee970e5872d247bf0414c8903"),
];

/// Harvestor contract compounding rewards back into the vault
pub const MAGIC_GLP_HARVESTOR_ADDRESS: Address =
    address!("0x588d402c868add9053f8f0098c2dc3443c991d17");

pub const HOURS_PER_YEAR: u32 = 8760;

/// The harvestor runs hourly
pub const MAGIC_GLP_ANNUAL_HARVESTS: u32 = HOURS_PER_YEAR;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cauldron_table_has_no_duplicates() {
        for (i, a) in ARBITRUM_CAULDRONS.iter().enumerate() {
            for b in ARBITRUM_CAULDRONS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_addresses_are_nonzero() {
        let all = [
            CURVE_MIM_3POOL_FARM,
            M_SPELL_ADDRESS,
            S_SPELL_ADDRESS,
            SPELL_ADDRESS,
            MAGIC_GLP_ADDRESS,
            MAGIC_GLP_HARVESTOR_ADDRESS,
        ];
        for address in all.iter().chain(&ARBITRUM_CAULDRONS).chain(&GLP_REWARD_TRACKER_ADDRESSES) {
            assert_ne!(*address, Address::ZERO);
        }
    }

    #[test]
    fn test_display_renders_eip55_checksum() {
        assert_eq!(
            MAGIC_GLP_HARVESTOR_ADDRESS.to_string(),
            "0x588d402C868aDD9053f8F0098c2DC3443c991d17"
        );
    }

    #[test]
    fn test_harvest_cadence_is_hourly() {
        assert_eq!(MAGIC_GLP_ANNUAL_HARVESTS, 8760);
        assert_eq!(MAGIC_GLP_ANNUAL_HARVESTS, HOURS_PER_YEAR);
    }

    #[test]
    fn test_spell_roles_share_a_deployment() {
        // Two named roles, one contract. Kept separate on purpose.
        assert_eq!(S_SPELL_ADDRESS, SPELL_ADDRESS);
    }
}
