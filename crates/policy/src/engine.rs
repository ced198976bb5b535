//! Policy engine: configuration, cache and evaluator behind one entry point

use crate::cache::PolicyCache;
use crate::catalog;
use crate::compiler::{self, CompiledPolicy};
use crate::context::CallContext;
use crate::descriptor::PolicyDescriptor;
use crate::error::{Denial, ScriptFault};
use crate::evaluator;
use crate::global::GlobalPolicyState;
use once_cell::sync::OnceCell;
use scriptgate_config::ConfigSource;
use scriptgate_core::{creator_rule_key, owner_rule_key, ThreatLevel};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Engine shared by every script instance in the process
static SHARED_ENGINE: OnceCell<Arc<PolicyEngine>> = OnceCell::new();

/// Authorization engine for privileged script operations
///
/// Holds the global switches, the configuration the per-operation overrides
/// are read from, and the cache of compiled policies. All methods take
/// `&self` and are safe to call from any number of threads.
pub struct PolicyEngine {
    state: GlobalPolicyState,
    config: Arc<dyn ConfigSource>,
    cache: PolicyCache,
}

impl PolicyEngine {
    /// Create an engine reading its settings from `config`
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        let state = GlobalPolicyState::from_source(config.as_ref());
        info!(
            functions_enabled = state.functions_enabled,
            max_threat_level = %state.max_threat_level,
            denial_addressed_to_owner = state.denial_addressed_to_owner,
            "Script function policy initialized"
        );
        Self {
            state,
            config,
            cache: PolicyCache::new(),
        }
    }

    /// Process-wide engine
    ///
    /// The first caller initializes it from the configuration `init`
    /// returns; every later caller gets the same engine and `init` is not
    /// run again.
    pub fn shared<F>(init: F) -> Arc<PolicyEngine>
    where
        F: FnOnce() -> Arc<dyn ConfigSource>,
    {
        Arc::clone(SHARED_ENGINE.get_or_init(|| Arc::new(PolicyEngine::new(init()))))
    }

    /// Process-wide engine, if already initialized
    pub fn try_shared() -> Option<Arc<PolicyEngine>> {
        SHARED_ENGINE.get().map(Arc::clone)
    }

    pub fn state(&self) -> &GlobalPolicyState {
        &self.state
    }

    pub fn cache(&self) -> &PolicyCache {
        &self.cache
    }

    /// Compile the current overrides of `operation` without caching them
    pub fn compile(&self, operation: &str) -> CompiledPolicy {
        let owner_rule = self
            .config
            .get_string(&owner_rule_key(operation))
            .unwrap_or_default();
        let creator_rule = self
            .config
            .get_string(&creator_rule_key(operation))
            .unwrap_or_default();
        compiler::compile(operation, &owner_rule, &creator_rule)
    }

    /// Cached policy of `operation`, compiled on first use
    pub fn descriptor(&self, operation: &str) -> Arc<PolicyDescriptor> {
        self.cache.get_or_compile(operation, || {
            debug!(operation = %operation, "Compiling policy");
            self.compile(operation).descriptor
        })
    }

    /// Decide whether `operation`, rated `level`, may run for `ctx`
    ///
    /// Does not look at the global enable switch; use
    /// [`ensure_authorized`](Self::ensure_authorized) from operation entry
    /// points.
    pub fn authorize(
        &self,
        operation: &str,
        level: ThreatLevel,
        ctx: &CallContext<'_>,
    ) -> Result<(), Denial> {
        let policy = self.descriptor(operation);
        let verdict = evaluator::evaluate(operation, level, self.state.max_threat_level, &policy, ctx);
        if let Err(denial) = &verdict {
            debug!(operation = %operation, reason = %denial, "Operation denied");
        }
        verdict
    }

    /// Gate for a privileged operation: fails with the fault to raise into
    /// the script when the call may not proceed
    pub fn ensure_authorized(
        &self,
        operation: &str,
        level: ThreatLevel,
        ctx: &CallContext<'_>,
    ) -> Result<(), ScriptFault> {
        if !self.state.functions_enabled {
            return Err(self.fault(Denial::GloballyDisabled {
                operation: operation.to_string(),
            }));
        }
        self.authorize(operation, level, ctx)
            .map_err(|denial| self.fault(denial))
    }

    /// Gate for an operation known to the catalog, using its catalog rating
    pub fn ensure_cataloged(
        &self,
        operation: &str,
        ctx: &CallContext<'_>,
    ) -> Result<(), ScriptFault> {
        let level = catalog::threat_level_of(operation).ok_or_else(|| {
            ScriptFault::UnknownOperation {
                operation: operation.to_string(),
            }
        })?;
        self.ensure_authorized(operation, level, ctx)
    }

    /// Gate for functions that only need the global switch
    pub fn check_enabled(&self) -> Result<(), ScriptFault> {
        if self.state.functions_enabled {
            Ok(())
        } else {
            Err(ScriptFault::runtime(
                "permission denied. All unsafe OSSL functions disabled",
            ))
        }
    }

    fn fault(&self, denial: Denial) -> ScriptFault {
        ScriptFault::permission(denial, self.state.denial_addressed_to_owner)
    }
}

impl fmt::Debug for PolicyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyEngine")
            .field("state", &self.state)
            .field("cached_policies", &self.cache.len())
            .finish_non_exhaustive()
    }
}
