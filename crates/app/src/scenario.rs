//! Scenario runner — replays a list of commands against a home.

use smarthome_domain::command::Command;

use crate::controller::HomeController;
use crate::ports::Console;

/// The demonstration sequence run when nothing else is configured.
pub const DEFAULT_SCENARIO: [Command; 2] =
    [Command::DecreaseLightBrightness, Command::PrintTvInfo];

/// Issue each command in order.
#[tracing::instrument(skip_all, fields(steps = steps.len()))]
pub fn run_scenario<C: Console>(home: &mut HomeController<C>, steps: &[Command]) {
    for (index, command) in steps.iter().copied().enumerate() {
        tracing::debug!(index, %command, "running step");
        home.handle(command);
    }
    tracing::debug!(powered_on = home.powered_on_count(), "scenario finished");
}
