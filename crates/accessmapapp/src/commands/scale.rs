use crate::commands::{CmdMessage, CmdResult, ScaleStatus};
use crate::error::Result;
use crate::preferences::{ScaleTarget, TextScaleStore};
use crate::store::KeyValueBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAction {
    Show,
    Increase,
    Decrease,
    Reset,
}

pub fn status<B: KeyValueBackend, T: ScaleTarget>(store: &TextScaleStore<B, T>) -> ScaleStatus {
    ScaleStatus {
        scale: store.scale(),
        can_increase: store.can_increase(),
        can_decrease: store.can_decrease(),
        can_reset: store.can_reset(),
    }
}

pub fn run<B: KeyValueBackend, T: ScaleTarget>(
    store: &mut TextScaleStore<B, T>,
    action: ScaleAction,
) -> Result<CmdResult> {
    let before = store.scale();
    let after = match action {
        ScaleAction::Show => before,
        ScaleAction::Increase => store.increase()?,
        ScaleAction::Decrease => store.decrease()?,
        ScaleAction::Reset => store.reset()?,
    };

    let mut result = CmdResult::default();
    match action {
        ScaleAction::Show => {}
        _ if after != before => {
            result.add_message(CmdMessage::success(format!("Размер текста: {}", after)));
        }
        ScaleAction::Increase => {
            result.add_message(CmdMessage::info("Размер текста уже максимальный"));
        }
        ScaleAction::Decrease => {
            result.add_message(CmdMessage::info("Размер текста уже минимальный"));
        }
        ScaleAction::Reset => {
            result.add_message(CmdMessage::info("Размер текста уже стандартный"));
        }
    }
    Ok(result.with_text_scale(status(store)))
}
