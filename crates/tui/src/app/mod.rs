use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent};
use engine::{BudgetStatus, CategorySummary, DeletionWorkflow, Pagination, evaluate, summarize};

use crate::{
    budget_sync::BudgetBridge,
    cache::ExpenseCache,
    client::{Client, describe_error},
    config::AppConfig,
    error::{AppError, Result},
    session::SessionContext,
    ui,
};

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Table,
    ConfirmDelete,
    EditBudget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

/// Everything the renderer needs besides the cached views themselves.
#[derive(Debug)]
pub struct DashboardState {
    pub user_id: String,
    pub mode: Mode,
    pub pagination: Pagination,
    pub deletion: DeletionWorkflow,
    pub summary: CategorySummary,
    pub budget: BudgetStatus,
    pub ceiling: f64,
    pub selected: usize,
    pub budget_input: String,
    pub budget_input_error: Option<String>,
    pub load_error: Option<String>,
    pub toast: Option<ToastState>,
    pub last_refresh: Option<DateTime<Local>>,
}

pub struct App {
    cache: ExpenseCache,
    bridge: BudgetBridge,
    pub state: DashboardState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let session = SessionContext::new(config.user_id.clone());

        let state = DashboardState {
            user_id: config.user_id,
            mode: Mode::Table,
            pagination: Pagination::new(config.page_size),
            deletion: DeletionWorkflow::new(),
            summary: CategorySummary::default(),
            budget: evaluate(0.0, 0.0),
            ceiling: 0.0,
            selected: 0,
            budget_input: String::new(),
            budget_input_error: None,
            load_error: None,
            toast: None,
            last_refresh: None,
        };

        Ok(Self {
            cache: ExpenseCache::new(client.clone(), session.clone()),
            bridge: BudgetBridge::new(client, session),
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        self.initial_load().await;

        while !self.should_quit {
            self.expire_toast();
            terminal
                .draw(|frame| ui::render(frame, &self.state, self.cache.views()))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn initial_load(&mut self) {
        if let Err(err) = self.bridge.load().await {
            let message = describe_error(&err);
            tracing::warn!(%message, "budget fetch failed");
            self.toast(format!("Budget unavailable: {message}"), ToastLevel::Error);
        }
        self.reload_page().await;
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = ui::keymap::map_key(key);

        if action == ui::keymap::AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.mode {
            Mode::Table => self.handle_table_key(action).await,
            Mode::ConfirmDelete => self.handle_confirm_key(action).await,
            Mode::EditBudget => self.handle_budget_key(action),
        }
    }

    async fn handle_table_key(&mut self, action: ui::keymap::AppAction) {
        use ui::keymap::AppAction;

        match action {
            AppAction::Up => self.select_prev(),
            AppAction::Down => self.select_next(),
            AppAction::Input('k') => self.select_prev(),
            AppAction::Input('j') => self.select_next(),
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('r') => self.reload_page().await,
            AppAction::Input('n') => {
                if self.state.pagination.next().is_some() {
                    self.reload_page().await;
                }
            }
            AppAction::Input('p') => {
                if self.state.pagination.prev().is_some() {
                    self.reload_page().await;
                }
            }
            AppAction::Input('d') => self.open_delete_confirmation(),
            AppAction::Input('b') => self.open_budget_editor(),
            _ => {}
        }
    }

    async fn handle_confirm_key(&mut self, action: ui::keymap::AppAction) {
        use ui::keymap::AppAction;

        match action {
            AppAction::Submit | AppAction::Input('y') => self.commit_delete().await,
            AppAction::Cancel | AppAction::Input('n') => {
                self.state.deletion.cancel();
                self.state.mode = Mode::Table;
            }
            _ => {}
        }
    }

    fn handle_budget_key(&mut self, action: ui::keymap::AppAction) {
        use ui::keymap::AppAction;

        match action {
            AppAction::Input(ch) if ch.is_ascii_digit() || ch == '.' => {
                self.state.budget_input.push(ch);
            }
            AppAction::Backspace => {
                self.state.budget_input.pop();
            }
            AppAction::Submit => self.submit_budget(),
            AppAction::Cancel => {
                self.state.budget_input_error = None;
                self.state.mode = Mode::Table;
            }
            _ => {}
        }
    }

    fn open_delete_confirmation(&mut self) {
        let Some(target) = self
            .cache
            .views()
            .page_view()
            .get(self.state.selected)
            .map(|e| e.id.clone())
        else {
            return;
        };
        if self.state.deletion.select(target) {
            self.state.mode = Mode::ConfirmDelete;
        }
    }

    fn open_budget_editor(&mut self) {
        self.state.budget_input = if self.state.ceiling > 0.0 {
            format!("{}", self.state.ceiling)
        } else {
            String::new()
        };
        self.state.budget_input_error = None;
        self.state.mode = Mode::EditBudget;
    }

    async fn commit_delete(&mut self) {
        let Some(target) = self.state.deletion.confirm() else {
            self.state.mode = Mode::Table;
            return;
        };
        self.state.mode = Mode::Table;

        let outcome = self.cache.remove(&target).await;
        self.state.deletion.finish();

        match outcome {
            Ok(()) => {
                self.toast("Expense deleted.", ToastLevel::Success);
                let total = self.cache.views().total_count();
                if self.state.pagination.set_total_count(total).is_some() {
                    // The last row of the last page vanished; fetch the
                    // clamped page.
                    self.reload_page().await;
                }
                self.clamp_selection();
                self.refresh_derived();
            }
            Err(err) => {
                let message = describe_error(&err);
                tracing::warn!(%message, target, "delete failed");
                self.toast(format!("Delete failed: {message}"), ToastLevel::Error);
            }
        }
    }

    fn submit_budget(&mut self) {
        match self.state.budget_input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {
                self.bridge.set_ceiling(value);
                self.state.budget_input_error = None;
                self.state.mode = Mode::Table;
                self.refresh_derived();
            }
            _ => {
                self.state.budget_input_error = Some("Enter a non-negative amount.".to_string());
            }
        }
    }

    /// Loads the page the controller currently points at, then reconciles
    /// the page with the server-reported count (which may clamp and require
    /// one more fetch).
    async fn reload_page(&mut self) {
        loop {
            let page = self.state.pagination.page();
            let limit = self.state.pagination.page_size();
            match self.cache.load(page, limit).await {
                Ok(()) => {
                    self.state.load_error = None;
                    self.state.last_refresh = Some(Local::now());
                    let total = self.cache.views().total_count();
                    if self.state.pagination.set_total_count(total).is_some() {
                        continue;
                    }
                }
                Err(err) => {
                    let message = describe_error(&err);
                    tracing::warn!(%message, page, "expense load failed");
                    self.state.load_error = Some(message.clone());
                    self.toast(format!("Load failed: {message}"), ToastLevel::Error);
                }
            }
            break;
        }
        self.clamp_selection();
        self.refresh_derived();
    }

    /// Recomputes the aggregates and the budget signal. Called explicitly
    /// after every cache mutation or ceiling change; nothing recomputes
    /// behind the renderer's back.
    fn refresh_derived(&mut self) {
        self.state.summary = summarize(self.cache.views().full_view());
        self.state.ceiling = self.bridge.ceiling();
        self.state.budget = evaluate(self.state.summary.total_spend(), self.state.ceiling);
    }

    fn select_next(&mut self) {
        let len = self.cache.views().page_view().len();
        if len > 0 {
            self.state.selected = (self.state.selected + 1).min(len - 1);
        }
    }

    fn select_prev(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.cache.views().page_view().len();
        self.state.selected = self.state.selected.min(len.saturating_sub(1));
    }

    fn toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.state.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    fn expire_toast(&mut self) {
        let expired = self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= Instant::now());
        if expired {
            self.state.toast = None;
        }
    }
}
