use std::collections::BTreeSet;

use crate::runners::{Outcome, Runner, SUCCESS_DELAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Task {
    ReadLogs,
    WriteLogs,
    CreateUsers,
    DeleteUsers,
    ApproveExpenses,
    ViewExpenses,
    DeployCode,
    ReviewCode,
    BackupData,
    RestoreData,
    MonitorSystems,
    ConfigureSystems,
}

impl Task {
    pub const ALL: [Task; 12] = [
        Task::ReadLogs,
        Task::WriteLogs,
        Task::CreateUsers,
        Task::DeleteUsers,
        Task::ApproveExpenses,
        Task::ViewExpenses,
        Task::DeployCode,
        Task::ReviewCode,
        Task::BackupData,
        Task::RestoreData,
        Task::MonitorSystems,
        Task::ConfigureSystems,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Task::ReadLogs => "read_logs",
            Task::WriteLogs => "write_logs",
            Task::CreateUsers => "create_users",
            Task::DeleteUsers => "delete_users",
            Task::ApproveExpenses => "approve_expenses",
            Task::ViewExpenses => "view_expenses",
            Task::DeployCode => "deploy_code",
            Task::ReviewCode => "review_code",
            Task::BackupData => "backup_data",
            Task::RestoreData => "restore_data",
            Task::MonitorSystems => "monitor_systems",
            Task::ConfigureSystems => "configure_systems",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Task::ReadLogs => "Lecture des logs",
            Task::WriteLogs => "Écriture des logs",
            Task::CreateUsers => "Créer des utilisateurs",
            Task::DeleteUsers => "Supprimer des utilisateurs",
            Task::ApproveExpenses => "Approuver les dépenses",
            Task::ViewExpenses => "Voir les dépenses",
            Task::DeployCode => "Déployer le code",
            Task::ReviewCode => "Réviser le code",
            Task::BackupData => "Sauvegarder les données",
            Task::RestoreData => "Restaurer les données",
            Task::MonitorSystems => "Monitorer les systèmes",
            Task::ConfigureSystems => "Configurer les systèmes",
        }
    }

    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Task::ReadLogs | Task::WriteLogs => "Logs",
            Task::CreateUsers | Task::DeleteUsers => "Users",
            Task::ApproveExpenses | Task::ViewExpenses => "Finance",
            Task::DeployCode | Task::ReviewCode => "Code",
            Task::BackupData | Task::RestoreData | Task::MonitorSystems | Task::ConfigureSystems => {
                "System"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Developer,
    Auditor,
    HrManager,
    Sysadmin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Developer, Role::Auditor, Role::HrManager, Role::Sysadmin];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Developer => "Développeur",
            Role::Auditor => "Auditeur",
            Role::HrManager => "Responsable RH",
            Role::Sysadmin => "Administrateur Système",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Role::Developer => "Développe et déploie le code",
            Role::Auditor => "Examine les logs et les dépenses",
            Role::HrManager => "Gère les utilisateurs et les dépenses",
            Role::Sysadmin => "Maintient l'infrastructure",
        }
    }

    /// Exactly the tasks this role needs.
    #[must_use]
    pub fn required_tasks(self) -> &'static [Task] {
        match self {
            Role::Developer => &[Task::DeployCode, Task::ReviewCode, Task::ReadLogs],
            Role::Auditor => &[Task::ReadLogs, Task::ViewExpenses],
            Role::HrManager => &[Task::CreateUsers, Task::ApproveExpenses, Task::ViewExpenses],
            Role::Sysadmin => &[
                Task::MonitorSystems,
                Task::ConfigureSystems,
                Task::BackupData,
                Task::RestoreData,
            ],
        }
    }

    #[must_use]
    pub fn requires(self, task: Task) -> bool {
        self.required_tasks().contains(&task)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Verdict for one role after verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFeedback {
    pub too_many: bool,
    pub too_few: bool,
}

impl RoleFeedback {
    #[must_use]
    pub fn evaluate(role: Role, assigned: &BTreeSet<Task>) -> Self {
        Self {
            too_many: assigned.iter().any(|task| !role.requires(*task)),
            too_few: role.required_tasks().iter().any(|task| !assigned.contains(task)),
        }
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        !self.too_many && !self.too_few
    }

    /// Status line, "too many" taking precedence over "too few".
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.too_many {
            "Trop de permissions accordées"
        } else if self.too_few {
            "Permissions insuffisantes"
        } else {
            "Permissions optimales"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeastPrivilegeTimer {
    Success,
}

/// Give each role the minimal set of tasks it needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeastPrivilegeRunner {
    assigned: [BTreeSet<Task>; 4],
    feedback: Option<[RoleFeedback; 4]>,
}

impl LeastPrivilegeRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, role: Role, task: Task) {
        if self.feedback.is_some() {
            return;
        }
        let tasks = &mut self.assigned[role.index()];
        if !tasks.remove(&task) {
            tasks.insert(task);
        }
    }

    pub fn verify(&mut self) -> Outcome<LeastPrivilegeTimer> {
        if self.feedback.is_some() {
            return Outcome::Idle;
        }
        let feedback = Role::ALL.map(|role| RoleFeedback::evaluate(role, &self.assigned[role.index()]));
        self.feedback = Some(feedback);
        if feedback.iter().all(RoleFeedback::is_optimal) {
            Outcome::After(SUCCESS_DELAY, LeastPrivilegeTimer::Success)
        } else {
            Outcome::Idle
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_assigned(&self, role: Role, task: Task) -> bool {
        self.assigned[role.index()].contains(&task)
    }

    #[must_use]
    pub fn assigned(&self, role: Role) -> &BTreeSet<Task> {
        &self.assigned[role.index()]
    }

    #[must_use]
    pub fn feedback(&self, role: Role) -> Option<RoleFeedback> {
        self.feedback.map(|feedback| feedback[role.index()])
    }

    #[must_use]
    pub fn is_showing_results(&self) -> bool {
        self.feedback.is_some()
    }

    fn all_optimal(&self) -> bool {
        self.feedback
            .is_some_and(|feedback| feedback.iter().all(RoleFeedback::is_optimal))
    }
}

impl Runner for LeastPrivilegeRunner {
    type Timer = LeastPrivilegeTimer;

    fn fire(&mut self, timer: LeastPrivilegeTimer) -> Outcome<LeastPrivilegeTimer> {
        match timer {
            LeastPrivilegeTimer::Success if self.all_optimal() => Outcome::Completed,
            LeastPrivilegeTimer::Success => Outcome::Idle,
        }
    }
}
