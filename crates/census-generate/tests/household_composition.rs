use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use census_core::{Cell, CompositionPolicy, DATA_COLUMNS, Role};
use census_generate::generators::{EmployeeIdPool, compute_age};
use census_generate::{HouseholdContext, build_household, build_row, row_cells};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap_or_default()
}

fn roles(policy: CompositionPolicy, seed: u64, households: usize) -> Vec<Vec<Role>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ids = EmployeeIdPool::new();
    (0..households)
        .map(|_| {
            build_household(&mut ids, policy, today(), 1000, &mut rng)
                .expect("build household")
                .members
                .iter()
                .map(|member| member.role)
                .collect()
        })
        .collect()
}

#[test]
fn employee_only_households_have_one_row() {
    for household in roles(CompositionPolicy::EmployeeOnly, 1, 50) {
        assert_eq!(household, vec![Role::Employee]);
    }
}

#[test]
fn employee_spouse_households_have_two_rows() {
    for household in roles(CompositionPolicy::EmployeeSpouse, 2, 50) {
        assert_eq!(household, vec![Role::Employee, Role::Spouse]);
    }
}

#[test]
fn family_households_have_one_or_two_children_after_spouse() {
    let mut child_counts = Vec::new();
    for household in roles(CompositionPolicy::EmployeeSpouseChild, 3, 200) {
        assert_eq!(household[0], Role::Employee);
        assert_eq!(household[1], Role::Spouse);
        let children = &household[2..];
        assert!((1..=2).contains(&children.len()));
        assert!(children.iter().all(|role| *role == Role::Child));
        child_counts.push(children.len());
    }
    assert!(child_counts.contains(&1));
    assert!(child_counts.contains(&2));
}

#[test]
fn members_share_identity_and_follow_role_rules() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let mut ids = EmployeeIdPool::new();

    for _ in 0..100 {
        let household = build_household(
            &mut ids,
            CompositionPolicy::EmployeeSpouseChild,
            today(),
            1000,
            &mut rng,
        )
        .expect("build household");
        let employee = &household.members[0];

        for member in &household.members {
            assert_eq!(member.employee_id, household.employee_id);
            assert_eq!(member.last_name, employee.last_name);
            assert_eq!(member.age, compute_age(member.date_of_birth, today()));
            assert!(member.role.age_range().contains(&member.age));

            if member.role == Role::Employee {
                assert!(!member.email.is_empty());
                assert!(member.email.ends_with("@yopmail.com"));
                assert!(member.employment.is_some());
            } else {
                assert!(member.email.is_empty());
                assert!(member.employment.is_none());
            }
        }
    }
}

#[test]
fn employee_keeps_supplied_first_name() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let ctx = HouseholdContext {
        employee_id: "012345",
        last_name: "Nguyen",
        today: today(),
        max_attempts: 1000,
    };

    let employee = build_row(&ctx, Role::Employee, Some("Ana-Lucia"), &mut rng).expect("row");
    assert_eq!(employee.first_name, "Ana-Lucia");
    assert!(employee.email.starts_with("analucianguyen"));

    let child = build_row(&ctx, Role::Child, Some("Ignored"), &mut rng).expect("row");
    assert_eq!(child.last_name, "Nguyen");
    assert_eq!(child.employee_id, "012345");
    assert!(!child.first_name.is_empty());
    assert!(child.age <= 25);
}

#[test]
fn row_cells_follow_column_layout() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut ids = EmployeeIdPool::new();
    let household = build_household(
        &mut ids,
        CompositionPolicy::EmployeeSpouse,
        today(),
        1000,
        &mut rng,
    )
    .expect("build household");

    let employee = row_cells(&household.members[0]);
    assert_eq!(employee.len(), DATA_COLUMNS + 1);
    assert_eq!(employee[0], Cell::Empty);
    assert_eq!(employee[1], Cell::Text(household.employee_id.clone()));
    assert_eq!(employee[5], Cell::Text("Employee".to_string()));
    assert!(matches!(employee[8], Cell::Int(_)));
    assert_eq!(employee[10], Cell::Text("N".to_string()));
    assert_eq!(employee[11], Cell::Text("01/01/2023".to_string()));
    assert!(matches!(employee[12], Cell::Int(income) if (50_000..=90_000).contains(&income)));
    assert_eq!(employee[14], Cell::Text("1 Main Street".to_string()));
    assert_eq!(employee[15], Cell::Empty);
    assert_eq!(employee[17], Cell::Text("06106".to_string()));
    assert_eq!(employee[19], Cell::Text("yes".to_string()));
    assert_eq!(employee[20], Cell::Text("no".to_string()));
    assert!(employee[21..].iter().all(Cell::is_empty));

    let spouse = row_cells(&household.members[1]);
    assert_eq!(spouse.len(), DATA_COLUMNS + 1);
    assert_eq!(spouse[4], Cell::Empty);
    assert_eq!(spouse[5], Cell::Text("Spouse".to_string()));
    assert!(spouse[11..=13].iter().all(Cell::is_empty));
    assert!(matches!(&spouse[9], Cell::Text(code) if code == "F" || code == "M"));
}
