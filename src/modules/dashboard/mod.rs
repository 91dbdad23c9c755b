//! Dashboard module - the portal's landing page of key-metric cards

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NavigateTarget, NotifyLevel};
use crate::domain::metrics::{portal_metrics, Metric};

#[derive(Debug)]
pub struct Dashboard {
    metrics: Vec<Metric>,
    selected_card: usize,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            metrics: portal_metrics(),
            selected_card: 0,
        }
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn selected_card(&self) -> usize {
        self.selected_card
    }

    pub fn next_card(&mut self) {
        self.selected_card = (self.selected_card + 1) % self.metrics.len();
    }

    pub fn prev_card(&mut self) {
        let len = self.metrics.len();
        self.selected_card = (self.selected_card + len - 1) % len;
    }

    fn selected_metric(&self) -> Option<&Metric> {
        self.metrics.get(self.selected_card)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Dashboard {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => {
                self.next_card();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => {
                self.prev_card();
                Action::None
            }
            KeyCode::Enter => match self.selected_metric() {
                // Asset-counting cards drill into the Assets table
                Some(metric) if metric.title == "Active Assets" => {
                    Action::Navigate(NavigateTarget::Assets)
                }
                Some(metric) if metric.title == "Assets in Critical State" => {
                    Action::Navigate(NavigateTarget::Assets)
                }
                Some(metric) => {
                    Action::Notify(metric.description.to_string(), NotifyLevel::Info)
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }
}
