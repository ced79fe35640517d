//! Solver registry for looking up solvers by year and day

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First year with published puzzles
pub const BASE_YEAR: u16 = 2015;
/// Number of years accepted starting at [`BASE_YEAR`] (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Puzzles per year (days 1-25)
pub const DAYS_PER_YEAR: u8 = 25;

fn check_year_day(year: u16, day: u8) -> bool {
    (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year) && (1..=DAYS_PER_YEAR).contains(&day)
}

/// Creates a parsed solver from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver answers
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Collects solver factories before freezing them into a [`SolverRegistry`].
///
/// Registration rejects duplicate `(year, day)` pairs and dates outside the
/// supported calendar.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::RegistryBuilder;
///
/// // Everything linked into the binary that carries the "grid" tag
/// let registry = RegistryBuilder::new()
///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), FactoryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a raw factory for `(year, day)` answering `parts` parts
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !check_year_day(year, day) {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert(
            (year, day),
            FactoryEntry {
                factory: Box::new(factory),
                parts,
                tags,
            },
        );
        Ok(self)
    }

    /// Register solver type `S` for `(year, day)` without tags
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_solver_tagged::<S>(year, day, &[])
    }

    /// Register solver type `S` for `(year, day)` with filter tags
    pub fn register_solver_tagged<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, tags, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from `(year, day)` to solver factory
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), FactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `(year, day)`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if !check_year_day(year, day) {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Registered solvers ordered by year, then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entries.get(&(year, day)).map(|entry| FactoryInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type-erased registration hook stored in a [`SolverPlugin`].
///
/// Blanket-implemented for every `'static` [`Solver`], which is what lets
/// plugins of different solver types live in one `inventory` collection.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver_tagged::<S>(year, day, tags)
    }
}

/// A solver submitted for automatic discovery.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`:
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
/// pub struct Solver;
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used by `register_solver_plugins` filters
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
