//! Results document shown below the search bar
//!
//! The results area is a list of [`Container`]s, each holding labelled
//! [`HashField`]s. Renderers build containers from API payloads, the UI lays
//! them out (recording each field's box), and the hash formatter rewrites
//! the text of hash-bearing fields.
//!
//! Scheduled work refers to containers and fields by id. Ids are never
//! reused, so a task whose container was cleared away simply finds nothing.

mod render;

pub use render::{ExplorerView, Renderer};

use ratatui::text::Line;

/// Identifier of a rendered container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Wrap a raw id
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identifier of a field inside a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    /// Owning container
    pub container: ContainerId,
    /// Position of the field in the container
    pub index: usize,
}

/// Field class, deciding whether the hash formatter visits it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashClass {
    /// Generic hash (block hash, merkle root)
    Hash,
    /// Transaction hash
    TransactionHash,
    /// Hash of a block containing a transaction
    BlockHashes,
    /// Previous block hash
    PreviousBlockHash,
    /// Anything else (amounts, heights, addresses)
    Plain,
}

impl HashClass {
    /// Whether the hash formatter should visit fields of this class
    #[must_use]
    pub const fn is_hash_bearing(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Box a field occupied on the last drawn frame, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBox {
    pub width: u16,
    pub height: u16,
}

impl FieldBox {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A labelled value in the results area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashField {
    /// Label shown left of the value
    pub label: String,
    /// Field class
    pub class: HashClass,
    /// Displayed text (None when the field has no value node)
    value: Option<String>,
    /// Full hash remembered by the formatter
    cached_hash: Option<String>,
    /// Box recorded by the last draw
    bounds: Option<FieldBox>,
}

impl HashField {
    /// Create a field displaying `value`
    #[must_use]
    pub fn new(label: impl Into<String>, class: HashClass, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class,
            value: Some(value.into()),
            cached_hash: None,
            bounds: None,
        }
    }

    /// Create a field that has a label but no value text
    #[must_use]
    pub fn empty(label: impl Into<String>, class: HashClass) -> Self {
        Self {
            label: label.into(),
            class,
            value: None,
            cached_hash: None,
            bounds: None,
        }
    }

    /// Currently displayed text
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the displayed text
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Full hash remembered by a previous formatter pass
    #[must_use]
    pub fn cached_hash(&self) -> Option<&str> {
        self.cached_hash.as_deref()
    }

    /// Remember the full hash for later passes
    pub fn cache_hash(&mut self, hash: impl Into<String>) {
        self.cached_hash = Some(hash.into());
    }

    /// Box recorded by the last draw
    #[must_use]
    pub const fn bounds(&self) -> Option<FieldBox> {
        self.bounds
    }

    /// Record the box the field was drawn into
    pub const fn set_bounds(&mut self, bounds: FieldBox) {
        self.bounds = Some(bounds);
    }

    /// Width of the displayed text in terminal cells
    #[must_use]
    pub fn content_width(&self) -> usize {
        self.value
            .as_deref()
            .map_or(0, |value| Line::raw(value).width())
    }

    /// Whether the displayed text does not fit into the recorded box
    ///
    /// A field that has never been drawn has no box and never overflows.
    #[must_use]
    pub fn is_overflowing(&self) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        let content_width = self.content_width();
        let content_height = usize::from(content_width > 0);

        usize::from(bounds.width) < content_width || usize::from(bounds.height) < content_height
    }
}

/// A block of fields rendered for one search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: ContainerId,
    /// Heading shown above the fields
    pub title: String,
    /// Fields in display order
    pub fields: Vec<HashField>,
}

impl Container {
    /// Container id
    #[must_use]
    pub const fn id(&self) -> ContainerId {
        self.id
    }

    /// Append a field
    pub fn push(&mut self, field: HashField) {
        self.fields.push(field);
    }

    /// Append a field (builder style)
    #[must_use]
    pub fn with_field(mut self, field: HashField) -> Self {
        self.fields.push(field);
        self
    }
}

/// The `main` results area
#[derive(Debug, Default)]
pub struct ResultsView {
    containers: Vec<Container>,
    next_id: u64,
    /// Scroll offset in rows (set by the UI)
    pub scroll: usize,
}

impl ResultsView {
    /// Create an empty results area
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, not yet attached container with a fresh id
    pub fn create(&mut self, title: impl Into<String>) -> Container {
        let id = ContainerId(self.next_id);
        self.next_id += 1;
        Container {
            id,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Attach a container below the existing ones
    pub fn push(&mut self, container: Container) -> ContainerId {
        let id = container.id;
        self.containers.push(container);
        id
    }

    /// Remove everything and show only `container`
    pub fn replace(&mut self, container: Container) -> ContainerId {
        self.clear();
        self.push(container)
    }

    /// Remove all containers
    pub fn clear(&mut self) {
        self.containers.clear();
        self.scroll = 0;
    }

    /// Whether nothing is shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// All containers in display order
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Mutable access to all containers (used while drawing)
    pub fn containers_mut(&mut self) -> &mut [Container] {
        &mut self.containers
    }

    /// Look up a container
    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Look up a field
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&HashField> {
        self.container(id.container)
            .and_then(|container| container.fields.get(id.index))
    }

    /// Look up a field mutably
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut HashField> {
        self.containers
            .iter_mut()
            .find(|c| c.id == id.container)
            .and_then(|container| container.fields.get_mut(id.index))
    }

    /// Ids of hash-bearing fields, in document order
    ///
    /// With `scope` set only that container is searched; a scope that no
    /// longer exists yields nothing.
    #[must_use]
    pub fn hash_fields(&self, scope: Option<ContainerId>) -> Vec<FieldId> {
        self.containers
            .iter()
            .filter(|container| scope.is_none_or(|id| container.id == id))
            .flat_map(|container| {
                container
                    .fields
                    .iter()
                    .enumerate()
                    .filter(|(_, field)| field.class.is_hash_bearing())
                    .map(|(index, _)| FieldId {
                        container: container.id,
                        index,
                    })
            })
            .collect()
    }
}
