//! The fluent action builder.
//!
//! `FlowBuilder` owns the accumulated action list, the scope tracker and the
//! value codec. Each action method validates and defaults its parameters,
//! encodes interpolated text through the codec, and appends one record.
//! Block operations (`if_block`, `repeat_block`, `for_each`) open a child
//! scope, populate it through a synchronous closure, and close it through
//! the tracker — so begin/end markers always pair up even when a closure
//! returns early or leaves a chain handle unconsumed.

mod condition;

pub use condition::{Condition, IfChain};

use crate::codec::{Builtin, Param, ValueCodec, VarKind, Variable};
use crate::error::{BuildError, CodecError, DeclarationError, ScopeError};
use crate::flow::{
    Action, BlockId, Browser, Fallback, FlowDocument, FlowValue, ForEachMode, Icon, RequestMethod,
    TextCaseMode, ToastStyle, BUILD_VERSION, CLIENT_MIN_VERSION,
};
use crate::scope::{ScopeKind, ScopeTracker};
use crate::session::Session;

/// Options for [`FlowBuilder::for_each`].
#[derive(Debug, Clone)]
pub struct ForEachOptions {
    pub mode: ForEachMode,
    /// Match pattern, used by the regex iteration mode.
    pub pattern: Param,
    /// Capture group index handed to the loop body.
    pub group: u32,
    /// Iterate in reverse order.
    pub reverse: bool,
}

impl Default for ForEachOptions {
    fn default() -> Self {
        Self {
            mode: ForEachMode::EachLine,
            pattern: Param::Text(String::new()),
            group: 0,
            reverse: false,
        }
    }
}

/// Builds one workflow document through fluent action calls.
pub struct FlowBuilder {
    session: Session,
    codec: ValueCodec,
    scopes: ScopeTracker,
    actions: Vec<Action>,
    name: String,
    summary: String,
    icon: Icon,
}

impl FlowBuilder {
    /// Creates a builder with a fresh [`Session`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_session(name, Session::new())
    }

    /// Creates a builder over a caller-supplied session, e.g. a deterministic
    /// one under test.
    pub fn with_session(name: impl Into<String>, session: Session) -> Self {
        let codec = ValueCodec::new(&session);
        let root = session.block_id();
        Self {
            session,
            codec,
            scopes: ScopeTracker::new(root),
            actions: Vec::new(),
            name: name.into(),
            summary: String::new(),
            icon: Icon::default(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_icon(mut self, glyph: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = Icon {
            glyph: glyph.into(),
            color: color.into(),
        };
        self
    }

    /// The session namespacing this builder's placeholders.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The actions appended so far, in execution order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    // --- internal plumbing -------------------------------------------------

    fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Appends after auto-closing any scopes left open above `expected`.
    fn push_at(&mut self, expected: &BlockId, action: Action) -> Result<(), ScopeError> {
        self.scopes.unwind_to(expected, &mut self.actions)?;
        self.actions.push(action);
        Ok(())
    }

    pub(crate) fn close_scope(&mut self, expected: &BlockId) -> Result<(), ScopeError> {
        self.scopes.close(expected, &mut self.actions)
    }

    fn encode(&self, param: Param) -> Result<FlowValue, CodecError> {
        self.codec.encode(&param)
    }

    // --- variables ---------------------------------------------------------

    /// A handle to a host built-in variable (last result, clipboard, ...).
    pub fn builtin(&self, which: Builtin) -> Variable {
        Variable::new(VarKind::Builtin, which.id(), self.session.prefix_arc())
    }

    /// Declares a named variable and emits the set-variable action.
    ///
    /// Names are validated against `[A-Za-z0-9_-]+` here, at declaration,
    /// rather than failing later at serialization.
    pub fn set_variable(
        &mut self,
        name: &str,
        value: impl Into<Param>,
    ) -> Result<Variable, BuildError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DeclarationError::InvalidVariableName {
                name: name.to_string(),
            }
            .into());
        }
        let value = self.encode(value.into())?;
        self.codec.register(name);
        let variable = Variable::new(VarKind::Named, name.to_string(), self.session.prefix_arc());
        self.push(Action::SetVariable {
            value,
            name: FlowValue::literal(name),
        });
        Ok(variable)
    }

    /// Stores a value under a fresh auto-generated variable id and returns
    /// the handle.
    pub fn capture(&mut self, value: impl Into<Param>) -> Result<Variable, BuildError> {
        let value = self.encode(value.into())?;
        let vid = self.session.variable_id();
        self.codec.register(vid.clone());
        let variable = Variable::new(VarKind::Auto, vid.clone(), self.session.prefix_arc());
        self.push(Action::SetVariable {
            value,
            name: FlowValue::literal(vid),
        });
        Ok(variable)
    }

    /// Re-assigns an existing variable. Built-ins are read-only.
    pub fn assign(&mut self, variable: &Variable, value: impl Into<Param>) -> Result<(), BuildError> {
        if variable.is_builtin() {
            return Err(DeclarationError::AssignToBuiltin {
                id: variable.id().to_string(),
            }
            .into());
        }
        let value = self.encode(value.into())?;
        self.codec.register(variable.id());
        self.push(Action::SetVariable {
            value,
            name: FlowValue::literal(variable.id()),
        });
        Ok(())
    }

    /// Reads a variable into the last result.
    pub fn get_variable(&mut self, variable: &Variable, fallback: Fallback) {
        self.push(Action::GetVariable {
            fallback: fallback.code(),
            name: FlowValue::literal(variable.id()),
        });
    }

    // --- general / text ----------------------------------------------------

    /// A no-op comment record. Comment text is taken verbatim, never scanned
    /// for references.
    pub fn comment(&mut self, text: &str) {
        self.push(Action::Comment {
            text: FlowValue::literal(text),
        });
    }

    pub fn create_text(&mut self, text: impl Into<Param>) -> Result<(), BuildError> {
        let text = self.encode(text.into())?;
        self.push(Action::Text { text });
        Ok(())
    }

    pub fn text_case(
        &mut self,
        text: impl Into<Param>,
        mode: TextCaseMode,
    ) -> Result<(), BuildError> {
        let text = self.encode(text.into())?;
        self.push(Action::TextCase {
            mode: mode.code(),
            text,
        });
        Ok(())
    }

    // --- user interface ----------------------------------------------------

    pub fn show_text(&mut self, text: impl Into<Param>) -> Result<(), BuildError> {
        self.show_text_titled(text, "")
    }

    pub fn show_text_titled(
        &mut self,
        text: impl Into<Param>,
        title: impl Into<Param>,
    ) -> Result<(), BuildError> {
        let text = self.encode(text.into())?;
        let title = self.encode(title.into())?;
        self.push(Action::RenderText { text, title });
        Ok(())
    }

    pub fn select_from_menu(
        &mut self,
        items: impl Into<Param>,
        prompt: impl Into<Param>,
        multi_select: bool,
    ) -> Result<(), BuildError> {
        let lines = self.encode(items.into())?;
        let prompt = self.encode(prompt.into())?;
        self.push(Action::Menu {
            prompt,
            multi_value: multi_select,
            lines,
        });
        Ok(())
    }

    pub fn show_toast(
        &mut self,
        title: impl Into<Param>,
        style: ToastStyle,
        wait_until_done: bool,
    ) -> Result<(), BuildError> {
        let title = self.encode(title.into())?;
        self.push(Action::Toast {
            title,
            style: style.code(),
            wait_until_done,
        });
        Ok(())
    }

    // --- control flow ------------------------------------------------------

    /// Opens a conditional block, populates the then-branch through the
    /// closure, and returns a chain handle for `else_if` / `else_branch`.
    /// Dropping the handle closes the block with an empty else branch.
    pub fn if_block<F>(&mut self, condition: Condition, then_scope: F) -> Result<IfChain<'_>, BuildError>
    where
        F: FnOnce(&mut FlowBuilder) -> Result<(), BuildError>,
    {
        let block = self.begin_if(condition, then_scope)?;
        Ok(IfChain::new(self, block))
    }

    /// Emits the if-marker, runs the then-branch, and emits the else-marker
    /// (always present, even for an empty else). The condition scope stays
    /// open for the chain handle to extend or close.
    pub(crate) fn begin_if<F>(&mut self, condition: Condition, then_scope: F) -> Result<BlockId, BuildError>
    where
        F: FnOnce(&mut FlowBuilder) -> Result<(), BuildError>,
    {
        let lhs = self.encode(condition.lhs)?;
        let rhs = self.encode(condition.rhs)?;
        let block = self.session.block_id();
        self.push(Action::If {
            block_identifier: block.clone(),
            condition: condition.comparison.code(),
            lhs,
            rhs,
        });
        self.scopes.open(ScopeKind::Condition, block.clone());
        then_scope(self)?;
        self.push_at(
            &block,
            Action::Else {
                block_identifier: block.clone(),
            },
        )?;
        Ok(block)
    }

    /// Repeats the closure's actions `count` times. Returns the block
    /// identifier pairing the begin/end markers.
    pub fn repeat_block<F>(&mut self, count: u32, scope: F) -> Result<BlockId, BuildError>
    where
        F: FnOnce(&mut FlowBuilder) -> Result<(), BuildError>,
    {
        let block = self.session.block_id();
        self.push(Action::RepeatBegin {
            block_identifier: block.clone(),
            count,
        });
        self.scopes.open(ScopeKind::Repeat, block.clone());
        scope(self)?;
        self.close_scope(&block)?;
        Ok(block)
    }

    /// Iterates over lines or regex matches of `text`, running the closure's
    /// actions per item.
    pub fn for_each<F>(
        &mut self,
        text: impl Into<Param>,
        options: ForEachOptions,
        scope: F,
    ) -> Result<BlockId, BuildError>
    where
        F: FnOnce(&mut FlowBuilder) -> Result<(), BuildError>,
    {
        let text = self.encode(text.into())?;
        let pattern = self.encode(options.pattern)?;
        let block = self.session.block_id();
        self.push(Action::ForEachBegin {
            block_identifier: block.clone(),
            text,
            mode: options.mode.code(),
            pattern,
            group: options.group,
            reverse: options.reverse,
        });
        self.scopes.open(ScopeKind::ForEach, block.clone());
        scope(self)?;
        self.close_scope(&block)?;
        Ok(block)
    }

    pub fn after_delay(&mut self, seconds: f64) {
        self.push(Action::Delay { interval: seconds });
    }

    pub fn finish_running(&mut self) {
        self.push(Action::Finish);
    }

    /// Embeds script source. A `function () { ... }` or arrow wrapper is
    /// stripped and the body re-indented, so callers can pass a whole
    /// function literal.
    pub fn run_script(&mut self, source: &str) {
        self.push(Action::Script {
            script: FlowValue::literal(normalize_script(source)),
        });
    }

    // --- utilities ---------------------------------------------------------

    pub fn get_clipboard(&mut self) {
        self.push(Action::GetClipboard);
    }

    pub fn set_clipboard(
        &mut self,
        text: impl Into<Param>,
        local_only: bool,
        expire_after: u32,
    ) -> Result<(), BuildError> {
        let text = self.encode(text.into())?;
        self.push(Action::SetClipboard {
            text,
            local_only,
            expire_after,
        });
        Ok(())
    }

    pub fn math(&mut self, expr: impl Into<Param>) -> Result<(), BuildError> {
        let expr = self.encode(expr.into())?;
        self.push(Action::Math { expr });
        Ok(())
    }

    pub fn open_url(&mut self, url: impl Into<Param>, browser: Browser) -> Result<(), BuildError> {
        let url = self.encode(url.into())?;
        self.push(Action::OpenUrl {
            url,
            browser: browser.code(),
        });
        Ok(())
    }

    pub fn http_request(
        &mut self,
        url: impl Into<Param>,
        method: RequestMethod,
        headers: serde_json::Value,
        body: serde_json::Value,
    ) -> Result<(), BuildError> {
        let url = self.encode(url.into())?;
        let headers = self.encode(Param::Json(headers))?;
        let body = self.encode(Param::Json(body))?;
        self.push(Action::Request {
            body,
            url,
            method: method.code(),
            headers,
        });
        Ok(())
    }

    // --- export ------------------------------------------------------------

    /// Finalizes open scopes and assembles the document. The computed client
    /// version is the highest any contained action requires, floored at the
    /// baseline.
    pub fn export(mut self) -> FlowDocument {
        self.scopes.finalize(&mut self.actions);
        let client_version = self
            .actions
            .iter()
            .map(Action::client_min_version)
            .max()
            .unwrap_or(CLIENT_MIN_VERSION)
            .max(CLIENT_MIN_VERSION);
        FlowDocument {
            name: self.name,
            summary: self.summary,
            icon: self.icon,
            build_version: BUILD_VERSION,
            client_min_version: CLIENT_MIN_VERSION,
            client_version,
            actions: self.actions,
        }
    }
}

/// Strips a `function (...) {` / `(...) => {` first line and matching
/// closing brace, then removes the common leading indentation.
fn normalize_script(source: &str) -> String {
    let lines: Vec<&str> = source.trim_end().lines().collect();
    let mut body: &[&str] = &lines;

    if let (Some(first), Some(last)) = (
        lines.iter().position(|l| !l.trim().is_empty()),
        lines.iter().rposition(|l| !l.trim().is_empty()),
    ) {
        let head = lines[first].trim();
        let tail = lines[last].trim().trim_end_matches(';');
        let wrapped = (head.starts_with("function") || head.contains("=>")) && head.ends_with('{');
        if wrapped && tail == "}" && last > first {
            body = &lines[first + 1..last];
        }
    }

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| l.get(indent..).unwrap_or_else(|| l.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}
