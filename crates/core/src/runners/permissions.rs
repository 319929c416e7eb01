use crate::runners::{Outcome, Runner, SUCCESS_DELAY};

/// A fictional employee in the permission and RBAC exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Employee {
    pub name: &'static str,
    pub job: &'static str,
    pub email: &'static str,
    pub initials: &'static str,
}

pub const EMPLOYEES: [Employee; 3] = [
    Employee {
        name: "Thomas Martin",
        job: "Consultant",
        email: "t.martin@example.com",
        initials: "TM",
    },
    Employee {
        name: "Sophie Dubois",
        job: "Digital Sales Manager",
        email: "s.dubois@example.com",
        initials: "SD",
    },
    Employee {
        name: "Philippe Legrand",
        job: "Directeur Général",
        email: "p.legrand@example.com",
        initials: "PL",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ReadClients,
    WriteClients,
    ReadProducts,
    WriteProducts,
    CreateOrders,
    CancelOrders,
}

impl Permission {
    pub const ALL: [Permission; 6] = [
        Permission::ReadClients,
        Permission::WriteClients,
        Permission::ReadProducts,
        Permission::WriteProducts,
        Permission::CreateOrders,
        Permission::CancelOrders,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Permission::ReadClients => "read_clients",
            Permission::WriteClients => "write_clients",
            Permission::ReadProducts => "read_products",
            Permission::WriteProducts => "write_products",
            Permission::CreateOrders => "create_orders",
            Permission::CancelOrders => "cancel_orders",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Permission::ReadClients => "Lecture données clients",
            Permission::WriteClients => "Modification données clients",
            Permission::ReadProducts => "Lecture données produits",
            Permission::WriteProducts => "Modification données produits",
            Permission::CreateOrders => "Création commandes",
            Permission::CancelOrders => "Annulation commandes",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Permission::ReadClients => "Permet de consulter les informations clients",
            Permission::WriteClients => "Permet de modifier les informations clients",
            Permission::ReadProducts => "Permet de consulter le catalogue produits",
            Permission::WriteProducts => "Permet de modifier le catalogue produits",
            Permission::CreateOrders => "Permet de créer des commandes",
            Permission::CancelOrders => "Permet d'annuler des commandes",
        }
    }

    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Permission::ReadClients | Permission::WriteClients => "Clients",
            Permission::ReadProducts | Permission::WriteProducts => "Produits",
            Permission::CreateOrders | Permission::CancelOrders => "Commandes",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Six on/off flags, one per [`Permission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grants([bool; 6]);

impl Grants {
    pub const NONE: Grants = Grants([false; 6]);

    #[must_use]
    pub fn of(permissions: &[Permission]) -> Self {
        let mut grants = Self::NONE;
        for permission in permissions {
            grants.0[permission.index()] = true;
        }
        grants
    }

    #[must_use]
    pub fn allows(&self, permission: Permission) -> bool {
        self.0[permission.index()]
    }

    fn toggle(&mut self, permission: Permission) {
        let flag = &mut self.0[permission.index()];
        *flag = !*flag;
    }

    /// Number of flags that agree with `expected`.
    #[must_use]
    pub fn score_against(&self, expected: &Grants) -> u8 {
        let matching = self
            .0
            .iter()
            .zip(expected.0.iter())
            .filter(|(actual, wanted)| actual == wanted)
            .count();
        u8::try_from(matching).unwrap_or(u8::MAX)
    }
}

/// The answer key, indexed like [`EMPLOYEES`].
#[must_use]
pub fn expected_grants(user: usize) -> Grants {
    use Permission::*;
    match user {
        0 => Grants::of(&[ReadClients, ReadProducts]),
        1 => Grants::of(&[ReadClients, WriteClients, ReadProducts, CreateOrders]),
        _ => Grants::of(&Permission::ALL),
    }
}

/// Saved result for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserScore {
    pub score: u8,
    pub total: u8,
}

impl UserScore {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.score == self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionsTimer {
    Success,
}

/// Direct, per-user permission assignment in an "Active Directory" style
/// screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PermissionsRunner {
    grants: [Grants; 3],
    scores: [Option<UserScore>; 3],
    selected: Option<usize>,
    verification_shown: bool,
}

impl PermissionsRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus a user. Out-of-range indices are ignored.
    pub fn select_user(&mut self, user: usize) {
        if user < EMPLOYEES.len() {
            self.selected = Some(user);
        }
    }

    pub fn toggle(&mut self, permission: Permission) {
        if self.verification_shown {
            return;
        }
        if let Some(user) = self.selected {
            self.grants[user].toggle(permission);
        }
    }

    /// "Tout refuser" for the selected user.
    pub fn deny_all(&mut self) {
        if self.verification_shown {
            return;
        }
        if let Some(user) = self.selected {
            self.grants[user] = Grants::NONE;
        }
    }

    /// `true` once two users are saved: the next save verifies everything.
    #[must_use]
    pub fn is_last_user(&self) -> bool {
        self.completed_count() == EMPLOYEES.len() - 1
    }

    /// Save the selected user, or verify all three when this is the last one.
    pub fn save(&mut self) -> Outcome<PermissionsTimer> {
        let Some(user) = self.selected else {
            return Outcome::Idle;
        };
        if self.is_last_user() {
            for index in 0..self.scores.len() {
                self.scores[index] = Some(self.score_for(index));
            }
            self.verification_shown = true;
            if self.all_correct() {
                return Outcome::After(SUCCESS_DELAY, PermissionsTimer::Success);
            }
            return Outcome::Idle;
        }

        let next = (0..EMPLOYEES.len()).find(|&index| self.scores[index].is_none() && index != user);
        self.scores[user] = Some(self.score_for(user));
        if let Some(next) = next {
            self.selected = Some(next);
        }
        Outcome::Idle
    }

    fn score_for(&self, user: usize) -> UserScore {
        UserScore {
            score: self.grants[user].score_against(&expected_grants(user)),
            total: 6,
        }
    }

    fn all_correct(&self) -> bool {
        self.scores
            .iter()
            .all(|score| score.is_some_and(|score| score.is_correct()))
    }

    /// Clear everything and focus the first user.
    pub fn reset(&mut self) {
        *self = Self {
            selected: Some(0),
            ..Self::default()
        };
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn grants(&self, user: usize) -> Option<&Grants> {
        self.grants.get(user)
    }

    #[must_use]
    pub fn score(&self, user: usize) -> Option<UserScore> {
        self.scores.get(user).copied().flatten()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.scores.iter().filter(|score| score.is_some()).count()
    }

    #[must_use]
    pub fn is_verification_shown(&self) -> bool {
        self.verification_shown
    }
}

impl Runner for PermissionsRunner {
    type Timer = PermissionsTimer;

    fn fire(&mut self, timer: PermissionsTimer) -> Outcome<PermissionsTimer> {
        match timer {
            PermissionsTimer::Success if self.verification_shown && self.all_correct() => {
                Outcome::Completed
            }
            PermissionsTimer::Success => Outcome::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Permission::*;
    use super::*;

    fn grant(runner: &mut PermissionsRunner, user: usize, permissions: &[Permission]) {
        runner.select_user(user);
        for permission in permissions {
            runner.toggle(*permission);
        }
    }

    #[test]
    fn consultant_pattern_scores_full_marks() {
        let exact = Grants::of(&[ReadClients, ReadProducts]);
        assert_eq!(exact.score_against(&expected_grants(0)), 6);

        let extra = Grants::of(&[ReadClients, ReadProducts, CancelOrders]);
        assert_eq!(extra.score_against(&expected_grants(0)), 5);
        assert_eq!(Grants::NONE.score_against(&expected_grants(0)), 4);
    }

    #[test]
    fn save_without_selection_is_ignored() {
        let mut runner = PermissionsRunner::new();
        assert_eq!(runner.save(), Outcome::Idle);
        assert_eq!(runner.completed_count(), 0);
    }

    #[test]
    fn save_moves_to_next_unsaved_user() {
        let mut runner = PermissionsRunner::new();
        grant(&mut runner, 1, &[ReadClients]);
        assert_eq!(runner.save(), Outcome::Idle);
        assert_eq!(runner.score(1), Some(UserScore { score: 3, total: 6 }));
        assert_eq!(runner.selected(), Some(0));

        assert_eq!(runner.save(), Outcome::Idle);
        assert_eq!(runner.selected(), Some(2));
        assert!(runner.is_last_user());
        assert!(!runner.is_verification_shown());
    }

    #[test]
    fn all_correct_schedules_success() {
        let mut runner = PermissionsRunner::new();
        grant(&mut runner, 0, &[ReadClients, ReadProducts]);
        let _ = runner.save();
        grant(&mut runner, 1, &[ReadClients, WriteClients, ReadProducts, CreateOrders]);
        let _ = runner.save();
        grant(&mut runner, 2, &Permission::ALL);

        let outcome = runner.save();
        assert_eq!(
            outcome,
            Outcome::After(SUCCESS_DELAY, PermissionsTimer::Success)
        );
        assert!(runner.is_verification_shown());
        assert_eq!(runner.fire(PermissionsTimer::Success), Outcome::Completed);
    }

    #[test]
    fn wrong_answer_shows_scores_without_success() {
        let mut runner = PermissionsRunner::new();
        grant(&mut runner, 0, &[ReadClients, ReadProducts]);
        let _ = runner.save();
        let _ = runner.save();
        grant(&mut runner, 2, &Permission::ALL);

        assert_eq!(runner.save(), Outcome::Idle);
        assert!(runner.is_verification_shown());
        assert_eq!(runner.score(1), Some(UserScore { score: 2, total: 6 }));
        assert!(runner.score(2).unwrap().is_correct());
    }

    #[test]
    fn toggling_is_blocked_after_verification() {
        let mut runner = PermissionsRunner::new();
        runner.select_user(0);
        let _ = runner.save();
        let _ = runner.save();
        let _ = runner.save();
        assert!(runner.is_verification_shown());

        runner.toggle(CancelOrders);
        runner.deny_all();
        assert!(!runner.grants(runner.selected().unwrap()).unwrap().allows(CancelOrders));
    }

    #[test]
    fn deny_all_and_reset() {
        let mut runner = PermissionsRunner::new();
        grant(&mut runner, 2, &[ReadClients, WriteProducts]);
        runner.deny_all();
        assert_eq!(runner.grants(2), Some(&Grants::NONE));

        grant(&mut runner, 2, &[ReadClients]);
        let _ = runner.save();
        runner.reset();
        assert_eq!(runner.selected(), Some(0));
        assert_eq!(runner.completed_count(), 0);
        assert_eq!(runner.grants(2), Some(&Grants::NONE));
    }
}
