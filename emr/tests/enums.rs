/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use emr::error::UnknownVariantError;
use emr::types::*;
use pretty_assertions::assert_eq;
use proptest::proptest;
use std::str::FromStr;

macro_rules! check_enum {
    ($($ty:ident),* $(,)?) => {
        $(
            check_values::<$ty>(stringify!($ty), $ty::values(), $ty::try_parse, $ty::as_str);
        )*
    };
}

fn check_values<T>(
    name: &str,
    values: &[&str],
    parse: fn(&str) -> Result<T, UnknownVariantError>,
    as_str: fn(&T) -> &'static str,
) where
    T: FromStr<Err = UnknownVariantError> + for<'a> TryFrom<&'a str, Error = UnknownVariantError>,
    T: std::fmt::Display + std::fmt::Debug + PartialEq + AsRef<str>,
{
    assert!(!values.is_empty(), "{name} has no values");
    for value in values {
        let parsed = parse(value).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(*value, as_str(&parsed), "{name}");
        assert_eq!(*value, parsed.to_string(), "{name}");
        assert_eq!(*value, parsed.as_ref(), "{name}");
        assert_eq!(parsed, T::from_str(value).unwrap());
        assert_eq!(parsed, T::try_from(*value).unwrap());
    }

    let empty = parse("").unwrap_err();
    assert!(empty.is_empty_value(), "{name}");
    assert_eq!(name, empty.enum_name());

    let unknown = parse("BOGUS").unwrap_err();
    assert!(!unknown.is_empty_value(), "{name}");
    assert_eq!("BOGUS", unknown.value());
}

#[test]
fn every_literal_parses_and_round_trips() {
    check_enum!(
        ActionOnFailure,
        AdjustmentType,
        AutoScalingPolicyState,
        AutoScalingPolicyStateChangeReasonCode,
        CancelStepsRequestStatus,
        ClusterState,
        ClusterStateChangeReasonCode,
        ComparisonOperator,
        ComputeLimitsUnitType,
        InstanceCollectionType,
        InstanceFleetState,
        InstanceFleetStateChangeReasonCode,
        InstanceFleetType,
        InstanceGroupState,
        InstanceGroupStateChangeReasonCode,
        InstanceGroupType,
        InstanceRoleType,
        InstanceState,
        InstanceStateChangeReasonCode,
        JobFlowExecutionState,
        MarketType,
        OnDemandProvisioningAllocationStrategy,
        RepoUpgradeOnBoot,
        ScaleDownBehavior,
        SpotProvisioningAllocationStrategy,
        SpotProvisioningTimeoutAction,
        Statistic,
        StepCancellationOption,
        StepExecutionState,
        StepState,
        StepStateChangeReasonCode,
        Unit,
    );
}

#[test]
fn adjustment_type_examples() {
    assert_eq!(
        AdjustmentType::ExactCapacity,
        AdjustmentType::try_parse("EXACT_CAPACITY").unwrap()
    );
    let err = AdjustmentType::try_parse("BOGUS").unwrap_err();
    assert_eq!("unknown AdjustmentType variant: 'BOGUS'", err.to_string());
}

#[test]
fn literals_match_exactly() {
    assert_eq!(
        ComputeLimitsUnitType::InstanceFleetUnits,
        "InstanceFleetUnits".parse().unwrap()
    );
    assert!("INSTANCEFLEETUNITS".parse::<ComputeLimitsUnitType>().is_err());
    assert_eq!(
        SpotProvisioningAllocationStrategy::CapacityOptimized,
        "capacity-optimized".parse().unwrap()
    );
    assert_eq!(
        "lowest-price",
        OnDemandProvisioningAllocationStrategy::LowestPrice.as_str()
    );
    assert!(MarketType::try_parse(" SPOT").is_err());
}

#[test]
fn values_keep_declaration_order() {
    assert_eq!(&["ON_DEMAND", "SPOT"], MarketType::values());
    assert_eq!(27, Unit::values().len());
    assert_eq!(Some(&"COUNT_PER_SECOND"), Unit::values().last());
}

#[test]
fn enums_are_usable_as_set_members() {
    use std::collections::{BTreeSet, HashSet};
    let states: HashSet<_> = ["RUNNING", "WAITING", "RUNNING"]
        .iter()
        .map(|s| ClusterState::try_parse(s).unwrap())
        .collect();
    assert_eq!(2, states.len());
    let ordered: BTreeSet<_> = [StepState::Failed, StepState::Pending].into_iter().collect();
    assert_eq!(Some(&StepState::Pending), ordered.iter().next());
}

proptest! {
    #[test]
    fn strings_outside_the_value_set_are_rejected(s in "\\PC*") {
        if !ClusterState::values().contains(&s.as_str()) {
            let err = ClusterState::try_parse(&s).unwrap_err();
            assert_eq!(s.as_str(), err.value());
            assert_eq!(s.is_empty(), err.is_empty_value());
        }
    }

    #[test]
    fn parse_never_panics(s in ".*") {
        let _ = Unit::try_parse(&s);
        let _ = ActionOnFailure::try_parse(&s);
        let _ = InstanceGroupState::try_parse(&s);
    }
}
