//! Command handlers
//!
//! Each handler extracts its typed values, makes exactly one backend call
//! and prints a confirmation line.

use std::io::Write;

use clap::{ArgMatches, Command};

use super::schema::{self, HOST, ID, ReminderFields};
use super::{CommandName, Context, Handler, IdList};
use crate::error::{Operation, ReminderError};

/// `create --title T --message M --duration D`
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateHandler;

/// `edit --id ID [--id ID ...] --title T --message M --duration D`
#[derive(Debug, Default, Clone, Copy)]
pub struct EditHandler;

/// `fetch --id ID [--id ID ...]`
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchHandler;

/// `delete --id ID [--id ID ...]`
#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteHandler;

/// `health [--host URI]`
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthHandler;

impl Handler for CreateHandler {
    fn name(&self) -> CommandName {
        CommandName::Create
    }

    fn schema(&self, _ctx: &Context<'_>) -> Command {
        schema::create_schema()
    }

    fn execute(
        &self,
        ctx: &Context<'_>,
        matches: &ArgMatches,
        out: &mut dyn Write,
    ) -> Result<(), ReminderError> {
        let fields = ReminderFields::from_matches(matches);
        let payload = ctx
            .backend
            .create(&fields.title, &fields.message, fields.duration)
            .map_err(|e| ReminderError::backend(Operation::Create, e))?;

        writeln!(
            out,
            "Reminder created successfully:\n{}",
            String::from_utf8_lossy(&payload)
        )?;
        Ok(())
    }
}

impl Handler for EditHandler {
    fn name(&self) -> CommandName {
        CommandName::Edit
    }

    fn schema(&self, _ctx: &Context<'_>) -> Command {
        schema::edit_schema()
    }

    fn execute(
        &self,
        ctx: &Context<'_>,
        matches: &ArgMatches,
        out: &mut dyn Write,
    ) -> Result<(), ReminderError> {
        let ids = IdList::from_matches(matches, ID);
        // Only the most recent --id is edited.
        let Some(id) = ids.last() else {
            return Err(ReminderError::flag_parse(
                self.name(),
                "at least one --id is required",
            ));
        };
        let fields = ReminderFields::from_matches(matches);

        let payload = ctx
            .backend
            .edit(id, &fields.title, &fields.message, fields.duration)
            .map_err(|e| ReminderError::backend(Operation::Edit, e))?;

        writeln!(
            out,
            "Reminder edited successfully:\n{}",
            String::from_utf8_lossy(&payload)
        )?;
        Ok(())
    }
}

impl Handler for FetchHandler {
    fn name(&self) -> CommandName {
        CommandName::Fetch
    }

    fn schema(&self, _ctx: &Context<'_>) -> Command {
        schema::fetch_schema()
    }

    fn execute(
        &self,
        ctx: &Context<'_>,
        matches: &ArgMatches,
        out: &mut dyn Write,
    ) -> Result<(), ReminderError> {
        let ids = IdList::from_matches(matches, ID);
        let payload = ctx
            .backend
            .fetch(ids.as_slice())
            .map_err(|e| ReminderError::backend(Operation::Fetch, e))?;

        writeln!(
            out,
            "Reminder fetched successfully:\n{}",
            String::from_utf8_lossy(&payload)
        )?;
        Ok(())
    }
}

impl Handler for DeleteHandler {
    fn name(&self) -> CommandName {
        CommandName::Delete
    }

    fn schema(&self, _ctx: &Context<'_>) -> Command {
        schema::delete_schema()
    }

    fn execute(
        &self,
        ctx: &Context<'_>,
        matches: &ArgMatches,
        out: &mut dyn Write,
    ) -> Result<(), ReminderError> {
        let ids = IdList::from_matches(matches, ID);
        ctx.backend
            .delete(ids.as_slice())
            .map_err(|e| ReminderError::backend(Operation::Delete, e))?;

        writeln!(out, "Reminder deleted successfully:\n{ids}")?;
        Ok(())
    }
}

impl Handler for HealthHandler {
    fn name(&self) -> CommandName {
        CommandName::Health
    }

    fn schema(&self, ctx: &Context<'_>) -> Command {
        schema::health_schema(ctx.backend_uri)
    }

    fn execute(
        &self,
        ctx: &Context<'_>,
        matches: &ArgMatches,
        out: &mut dyn Write,
    ) -> Result<(), ReminderError> {
        let host = matches
            .get_one::<String>(HOST)
            .map_or(ctx.backend_uri, String::as_str);

        if ctx.backend.health(host) {
            writeln!(out, "Host {host} is up and running")?;
        } else {
            writeln!(out, "Host {host} is down")?;
        }
        Ok(())
    }
}
