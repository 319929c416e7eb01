use crate::runners::permissions::Employee;
use crate::runners::{Outcome, Runner, SUCCESS_DELAY};

pub const RBAC_USERS: [Employee; 3] = [
    Employee {
        name: "Thomas Martin",
        job: "Sales Manager",
        email: "thomas.martin@exalt.com",
        initials: "TM",
    },
    Employee {
        name: "Sophie Dubois",
        job: "Director",
        email: "sophie.dubois@exalt.com",
        initials: "SD",
    },
    Employee {
        name: "Philippe Legrand",
        job: "Consultant",
        email: "philippe.legrand@exalt.com",
        initials: "PL",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub permissions: &'static [&'static str],
}

pub const ROLES: [RoleDefinition; 3] = [
    RoleDefinition {
        name: "Consultant",
        description: "Accès en lecture seule aux données clients et produits",
        permissions: &["Voir les clients", "Voir les produits"],
    },
    RoleDefinition {
        name: "Sales Manager",
        description: "Gestion des clients et commandes, lecture des produits",
        permissions: &[
            "Voir les clients",
            "Modifier les clients",
            "Voir les produits",
            "Créer des commandes",
        ],
    },
    RoleDefinition {
        name: "Director",
        description: "Accès complet à toutes les fonctionnalités",
        permissions: &[
            "Voir les clients",
            "Modifier les clients",
            "Voir les produits",
            "Modifier les produits",
            "Créer des commandes",
            "Annuler des commandes",
        ],
    },
];

/// Role index expected for each user index.
pub const EXPECTED_ROLES: [usize; 3] = [1, 2, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RbacTimer {
    Success,
}

/// Assign each user to exactly one role, by drag-and-drop or by clicking the
/// user then the role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RbacRunner {
    assignments: [Option<usize>; 3],
    dragged: Option<usize>,
    selected: Option<usize>,
    verification_shown: bool,
}

impl RbacRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn can_pick(&self, user: usize) -> bool {
        !self.verification_shown && matches!(self.assignments.get(user), Some(None))
    }

    pub fn start_drag(&mut self, user: usize) {
        if self.can_pick(user) {
            self.dragged = Some(user);
        }
    }

    pub fn drop_on(&mut self, role: usize) {
        if let Some(user) = self.dragged.take() {
            self.assign(user, role);
        }
    }

    /// Click on a user card: selects it, or deselects it when already selected.
    pub fn click_user(&mut self, user: usize) {
        if !self.can_pick(user) {
            return;
        }
        self.selected = if self.selected == Some(user) {
            None
        } else {
            Some(user)
        };
    }

    pub fn click_role(&mut self, role: usize) {
        if self.verification_shown {
            return;
        }
        if let Some(user) = self.selected.take() {
            self.assign(user, role);
        }
    }

    fn assign(&mut self, user: usize, role: usize) {
        if self.verification_shown || role >= ROLES.len() {
            return;
        }
        if let Some(slot) = self.assignments.get_mut(user) {
            *slot = Some(role);
        }
    }

    /// Click on a user chip inside a role.
    pub fn unassign(&mut self, user: usize) {
        if self.verification_shown {
            return;
        }
        if let Some(slot) = self.assignments.get_mut(user) {
            *slot = None;
        }
    }

    #[must_use]
    pub fn can_verify(&self) -> bool {
        !self.verification_shown && self.assigned_count() == RBAC_USERS.len()
    }

    pub fn verify(&mut self) -> Outcome<RbacTimer> {
        if !self.can_verify() {
            return Outcome::Idle;
        }
        self.verification_shown = true;
        if self.all_correct() {
            Outcome::After(SUCCESS_DELAY, RbacTimer::Success)
        } else {
            Outcome::Idle
        }
    }

    /// "Réessayer": drop every assignment and leave verification.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.assignments
            .iter()
            .zip(EXPECTED_ROLES)
            .all(|(assigned, expected)| *assigned == Some(expected))
    }

    /// Pass/fail mark for `user`, only once verification is shown.
    #[must_use]
    pub fn mark(&self, user: usize) -> Option<bool> {
        if !self.verification_shown {
            return None;
        }
        let assigned = (*self.assignments.get(user)?)?;
        Some(EXPECTED_ROLES.get(user) == Some(&assigned))
    }

    #[must_use]
    pub fn can_retry(&self) -> bool {
        self.verification_shown && !self.all_correct()
    }

    #[must_use]
    pub fn assignment(&self, user: usize) -> Option<usize> {
        self.assignments.get(user).copied().flatten()
    }

    /// Users currently sitting in `role`.
    pub fn members(&self, role: usize) -> impl Iterator<Item = usize> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .filter(move |(_, assigned)| **assigned == Some(role))
            .map(|(user, _)| user)
    }

    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    #[must_use]
    pub fn is_verification_shown(&self) -> bool {
        self.verification_shown
    }
}

impl Runner for RbacRunner {
    type Timer = RbacTimer;

    fn fire(&mut self, timer: RbacTimer) -> Outcome<RbacTimer> {
        match timer {
            RbacTimer::Success if self.verification_shown && self.all_correct() => {
                Outcome::Completed
            }
            RbacTimer::Success => Outcome::Idle,
        }
    }
}
