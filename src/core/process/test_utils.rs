// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for code that runs processes.
//!
//! `FakeRunner` records every invocation and answers with a scripted response.

use std::cell::RefCell;

use super::{ProcessBuilder, ProcessOutput, ProcessRunner};
use crate::error::LabResult;

type Responder = Box<dyn Fn(&ProcessBuilder) -> LabResult<ProcessOutput>>;

pub(crate) struct FakeRunner {
    calls: RefCell<Vec<ProcessBuilder>>,
    responder: Responder,
}

impl FakeRunner {
    /// Answers every invocation with `responder`.
    pub(crate) fn new(
        responder: impl Fn(&ProcessBuilder) -> LabResult<ProcessOutput> + 'static,
    ) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// Every invocation exits 0 with no output.
    pub(crate) fn silent() -> Self {
        Self::new(|_| Ok(ProcessOutput::default()))
    }

    /// Every invocation exits 1 and writes `stderr`.
    pub(crate) fn failing(stderr: &'static str) -> Self {
        Self::new(move |_| Ok(ProcessOutput::new(1, Vec::new(), stderr.as_bytes().to_vec())))
    }

    pub(crate) fn calls(&self) -> Vec<ProcessBuilder> {
        self.calls.borrow().clone()
    }

    /// Command lines of every recorded invocation, in order.
    pub(crate) fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(ProcessBuilder::command_line)
            .collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, command: &ProcessBuilder) -> LabResult<ProcessOutput> {
        self.calls.borrow_mut().push(command.clone());
        (self.responder)(command)
    }
}
