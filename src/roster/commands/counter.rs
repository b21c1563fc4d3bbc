use crate::commands::{CmdMessage, CmdResult};
use crate::counter::CounterCell;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Show,
    Increment,
    Decrement,
    Reset,
}

pub fn run(cell: &mut CounterCell, action: CounterAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let value = match action {
        CounterAction::Show => cell.value(),
        CounterAction::Increment => cell.increment(),
        CounterAction::Decrement => {
            if cell.value() == 0 {
                result.add_message(CmdMessage::warning("Counter is already at 0."));
            }
            cell.decrement()
        }
        CounterAction::Reset => cell.reset(),
    };

    if action != CounterAction::Show
        && let Err(err) = cell.flush()
    {
        result.add_message(CmdMessage::error(format!("Counter not saved: {}", err)));
    }

    Ok(result.with_counter(value))
}
