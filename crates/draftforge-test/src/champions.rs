//! Sample champion catalog.
//!
//! Roughly four champions per slot with hand-picked tags so that each
//! required check has more than one provider, and so that the Top pool
//! mixes threat and non-threat champions.

use draftforge_core::{Catalog, Champion, DamageType, Scaling, Slot, Tag};

/// Creates a champion with the given roles, damage type and tags.
///
/// Scaling defaults to [`Scaling::Mid`].
pub fn champion(name: &str, roles: &[Slot], damage: DamageType, tags: &[Tag]) -> Champion {
    Champion::new(name, roles.iter().copied(), damage, Scaling::Mid).with_tags(tags.iter().copied())
}

fn scaled(mut c: Champion, scaling: Scaling) -> Champion {
    c.scaling = scaling;
    c
}

/// Returns the sample catalog used across the workspace tests.
pub fn sample_catalog() -> Catalog {
    use DamageType::{Ad, Ap, Mixed};
    use Slot::{Adc, Jungle, Mid, Support, Top};
    use Tag::*;

    Catalog::from_champions([
        // Top
        scaled(
            champion("Fiora", &[Top], Ad, &[SideLaneThreat, AntiTank, Mobility, Sustain]),
            Scaling::Late,
        ),
        champion("Camille", &[Top], Ad, &[DiveThreat, SideLaneThreat, PickThreat, AntiTank]),
        champion("Aatrox", &[Top], Ad, &[DiveThreat, Frontline, Sustain, Waveclear]),
        scaled(
            champion("Ornn", &[Top], Ap, &[Frontline, HardEngage, ZoneControl]),
            Scaling::Late,
        ),
        scaled(
            champion("Sion", &[Top], Ad, &[Frontline, HardEngage, Waveclear, Siege]),
            Scaling::Late,
        ),
        // Jungle
        champion("Sejuani", &[Jungle], Ap, &[Frontline, HardEngage, FollowUpEngage, ObjectiveSecure]),
        scaled(
            champion("Vi", &[Jungle], Ad, &[DiveThreat, PickThreat, FollowUpEngage]),
            Scaling::Early,
        ),
        scaled(
            champion("Lillia", &[Jungle], Ap, &[Waveclear, ZoneControl, Mobility]),
            Scaling::Late,
        ),
        champion("Graves", &[Jungle], Ad, &[PrimaryCarry, Burst, Waveclear]),
        // Mid
        scaled(
            champion("Azir", &[Mid], Ap, &[PrimaryCarry, Waveclear, ZoneControl, Disengage, Siege]),
            Scaling::Late,
        ),
        champion("Orianna", &[Mid], Ap, &[Waveclear, FollowUpEngage, Peel, UtilityCarry]),
        champion("Syndra", &[Mid], Ap, &[Burst, PickThreat, Waveclear]),
        champion("Galio", &[Mid, Support], Ap, &[HardEngage, Frontline, Peel]),
        // ADC
        champion("Ashe", &[Adc], Ad, &[UtilityCarry, PickThreat, Poke]),
        scaled(
            champion("Jinx", &[Adc], Ad, &[PrimaryCarry, FrontToBackDps, Siege, Waveclear]),
            Scaling::Late,
        ),
        scaled(
            champion("Kaisa", &[Adc], Mixed, &[DiveThreat, Burst, Mobility, PrimaryCarry]),
            Scaling::Late,
        ),
        champion("Varus", &[Adc], Mixed, &[Poke, Siege, AntiTank]),
        // Support
        scaled(
            champion("Leona", &[Support], Ap, &[HardEngage, Frontline, PickThreat]),
            Scaling::Early,
        ),
        champion("Janna", &[Support], Ap, &[Disengage, Peel, UtilityCarry]),
        champion("Rell", &[Support], Ap, &[HardEngage, Frontline, FollowUpEngage]),
        champion("Lulu", &[Support], Ap, &[Peel, UtilityCarry, Disengage]),
    ])
}
