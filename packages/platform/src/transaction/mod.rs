use serde::Serialize;

use crate::{
    emit::Event,
    error::{Error, Result},
    object_id::{Address, ObjectId},
};

pub use self::command::{Argument, Command, Input, MoveCall, Pure};

mod command;

/// An in-progress programmable transaction.
///
/// Commands are only ever appended, and each one may refer solely to inputs
/// and to results of commands appended before it. Nothing is executed here;
/// the transaction becomes eligible for hand-off once [finalized](Self::finalize).
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    inputs: Vec<Input>,
    commands: Vec<Command>,
    #[serde(skip)]
    events: Vec<Event>,
}

impl Transaction {
    /// Reference an on-chain object. Each object occupies a single input slot
    /// no matter how many commands refer to it.
    pub fn object(&mut self, id: ObjectId) -> Result<Argument> {
        self.inputs
            .iter()
            .position(|input| *input == Input::Object(id))
            .map_or_else(
                || self.schedule_input(Input::Object(id)),
                |index| Self::index(index, "inputs").map(Argument::Input),
            )
    }

    pub fn pure<V>(&mut self, value: V) -> Result<Argument>
    where
        V: Into<Pure>,
    {
        self.schedule_input(Input::Pure(value.into()))
    }

    /// Append a Move call and return a handle to its result.
    pub fn move_call(&mut self, call: MoveCall) -> Result<Argument> {
        self.schedule_command(Command::MoveCall(call))
    }

    pub fn transfer_objects(&mut self, objects: Vec<Argument>, recipient: Address) -> Result<()> {
        self.try_append(|tx| {
            tx.pure(recipient)
                .and_then(|address| {
                    tx.schedule_command(Command::TransferObjects { objects, address })
                })
                .map(|_| ())
        })
    }

    /// Run `append` against this transaction and keep whatever it appended
    /// only if it succeeds. On failure the inputs, commands and events are
    /// cut back to where they were.
    pub fn try_append<F, T, E>(&mut self, append: F) -> core::result::Result<T, E>
    where
        F: FnOnce(&mut Self) -> core::result::Result<T, E>,
    {
        let (inputs, commands, events) =
            (self.inputs.len(), self.commands.len(), self.events.len());

        append(self).map_err(|error| {
            self.inputs.truncate(inputs);
            self.commands.truncate(commands);
            self.events.truncate(events);

            error
        })
    }

    pub fn record<E>(&mut self, event: E)
    where
        E: Into<Event>,
    {
        self.events.push(event.into());
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Seal the transaction. No more commands may be appended afterwards.
    pub fn finalize(self) -> Result<Finalized> {
        if self.is_empty() {
            Err(Error::EmptyTransaction())
        } else {
            Ok(Finalized(self))
        }
    }

    fn schedule_input(&mut self, input: Input) -> Result<Argument> {
        Self::index(self.inputs.len(), "inputs").map(|index| {
            self.inputs.push(input);

            Argument::Input(index)
        })
    }

    fn schedule_command(&mut self, command: Command) -> Result<Argument> {
        let checked = command
            .arguments()
            .try_for_each(|&argument| self.check_argument(argument));

        checked
            .and_then(|()| Self::index(self.commands.len(), "commands"))
            .map(|index| {
                self.commands.push(command);

                Argument::Result(index)
            })
    }

    fn check_argument(&self, argument: Argument) -> Result<()> {
        let exists = match argument {
            Argument::GasCoin => true,
            Argument::Input(index) => usize::from(index) < self.inputs.len(),
            Argument::Result(index) | Argument::NestedResult(index, _) => {
                usize::from(index) < self.commands.len()
            }
        };

        if exists {
            Ok(())
        } else {
            Err(Error::DanglingArgument(argument))
        }
    }

    fn index(index: usize, kind: &'static str) -> Result<u16> {
        u16::try_from(index).map_err(|_| Error::CapacityExceeded(kind))
    }
}

/// A complete transaction, ready to be handed off for authorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Finalized(Transaction);

impl Finalized {
    pub fn transaction(&self) -> &Transaction {
        &self.0
    }

    pub fn commands(&self) -> &[Command] {
        self.0.commands()
    }

    pub fn events(&self) -> &[Event] {
        self.0.events()
    }

    /// The canonical serialized form. Equal transactions serialize into
    /// equal bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.0).map_err(|error| Error::Serialization(error.to_string()))
    }
}
