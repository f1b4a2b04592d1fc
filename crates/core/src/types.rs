//! Core types for the attribution engine
//!
//! This module defines the world model the resolver reasons about:
//! - [`WorldId`], [`Location`], [`SpatialKey`]: where things happen
//! - [`EntityId`], [`EntityKind`], [`Entity`]: what acted
//! - [`Block`], [`Material`], [`BlockState`]: what was changed
//!
//! Everything here is a snapshot delivered by the host. None of these types
//! hold references back into the live world.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a world (dimension)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(Uuid);

impl WorldId {
    /// Create a new random WorldId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway_core::types::WorldId;
    ///
    /// let overworld = WorldId::new();
    /// let nether = WorldId::new();
    /// assert_ne!(overworld, nether);
    /// ```
    pub fn new() -> Self {
        WorldId(Uuid::new_v4())
    }

    /// Wrap a UUID issued by the host
    pub fn from_uuid(uuid: Uuid) -> Self {
        WorldId(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cardinal direction a block can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// Unit offset of this direction as `(dx, dy, dz)`
    ///
    /// North points towards negative z, east towards positive x.
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// A floating-point position inside a world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// World the position belongs to
    pub world: WorldId,
    /// East/west coordinate
    pub x: f64,
    /// Height
    pub y: f64,
    /// North/south coordinate
    pub z: f64,
}

impl Location {
    /// Create a new location
    pub fn new(world: WorldId, x: f64, y: f64, z: f64) -> Self {
        Self { world, x, y, z }
    }

    /// Return a copy shifted by the given amounts
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Location {
        Location::new(self.world, self.x + dx, self.y + dy, self.z + dz)
    }

    /// Truncate to the block cell containing this location
    ///
    /// Coordinates are floored, so `-0.5` lands in cell `-1`. Returns `None`
    /// for non-finite or out-of-range coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway_core::types::{Location, WorldId};
    ///
    /// let world = WorldId::new();
    /// let key = Location::new(world, 10.7, 64.0, -0.5).block_key().unwrap();
    /// assert_eq!((key.x, key.y, key.z), (10, 64, -1));
    /// assert!(Location::new(world, f64::NAN, 0.0, 0.0).block_key().is_none());
    /// ```
    pub fn block_key(&self) -> Option<SpatialKey> {
        Some(SpatialKey {
            world: self.world,
            x: block_coord(self.x)?,
            y: block_coord(self.y)?,
            z: block_coord(self.z)?,
        })
    }
}

fn block_coord(value: f64) -> Option<i32> {
    let floored = value.floor();
    if !floored.is_finite() || floored < i32::MIN as f64 || floored > i32::MAX as f64 {
        return None;
    }
    Some(floored as i32)
}

/// Discrete block cell: (world, x, y, z)
///
/// Two locations map to the same key iff they fall in the same cell of the
/// same world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpatialKey {
    /// World the cell belongs to
    pub world: WorldId,
    /// Block x
    pub x: i32,
    /// Block y
    pub y: i32,
    /// Block z
    pub z: i32,
}

impl SpatialKey {
    /// Create a new key
    pub fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        Self { world, x, y, z }
    }

    /// The neighbouring cell one step in `direction`
    pub fn relative(&self, direction: Direction) -> SpatialKey {
        let (dx, dy, dz) = direction.delta();
        SpatialKey::new(
            self.world,
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }

    /// Location of the lower north-west corner of this cell
    pub fn corner(&self) -> Location {
        Location::new(self.world, self.x as f64, self.y as f64, self.z as f64)
    }

    /// Location of the centre of this cell
    pub fn center(&self) -> Location {
        self.corner().offset(0.5, 0.5, 0.5)
    }
}

impl std::fmt::Display for SpatialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{},{},{}", self.world, self.x, self.y, self.z)
    }
}

/// Stable host-issued identifier of a live entity
///
/// Scoped to one entity's lifetime: a new entity spawned in the same place
/// receives a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw host id
    pub const fn new(raw: u64) -> Self {
        EntityId(raw)
    }

    /// Get the raw value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Block or item material, e.g. `stone`, `tnt`, `item_frame`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Material(String);

impl Material {
    /// Create a material from its registry name
    pub fn new(name: impl Into<String>) -> Self {
        Material(name.into().to_ascii_lowercase())
    }

    /// Plain air
    pub fn air() -> Self {
        Material("air".to_string())
    }

    /// Registry name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// True for every air variant (and for an empty name)
    pub fn is_air(&self) -> bool {
        matches!(self.0.as_str(), "" | "air" | "cave_air" | "void_air")
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::air()
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which half of a bed a block is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedPart {
    Head,
    Foot,
}

/// Block data the rules care about
///
/// Anything the resolver does not inspect is carried verbatim in
/// [`BlockState::Generic`] so the audit log still receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockState {
    /// A bed half; `facing` points from the foot towards the head
    Bed { facing: Direction, part: BedPart },
    /// A respawn anchor and its charge level
    RespawnAnchor { charges: u8 },
    /// Opaque host block data
    Generic(String),
}

impl Default for BlockState {
    fn default() -> Self {
        BlockState::Generic(String::new())
    }
}

/// Snapshot of a block cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Cell of the block
    pub pos: SpatialKey,
    /// Material currently in the cell
    pub material: Material,
    /// Block data
    pub state: BlockState,
}

impl Block {
    /// Create a block with generic state
    pub fn new(pos: SpatialKey, material: Material) -> Self {
        Self {
            pos,
            material,
            state: BlockState::default(),
        }
    }

    /// Replace the block state
    pub fn with_state(mut self, state: BlockState) -> Self {
        self.state = state;
        self
    }
}

/// Kinds of entity the rules distinguish
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Tnt,
    EndCrystal,
    Creeper,
    Fireball,
    SmallFireball,
    DragonFireball,
    WitherSkull,
    TntMinecart,
    ItemFrame,
    GlowItemFrame,
    Painting,
    LeashKnot,
    Arrow,
    SpectralArrow,
    Trident,
    Snowball,
    Egg,
    /// Any other kind, by lower-case registry key
    Other(String),
}

impl EntityKind {
    /// Lower-case registry key, used as a mechanism name in tags
    pub fn key(&self) -> &str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Tnt => "tnt",
            EntityKind::EndCrystal => "end_crystal",
            EntityKind::Creeper => "creeper",
            EntityKind::Fireball => "fireball",
            EntityKind::SmallFireball => "small_fireball",
            EntityKind::DragonFireball => "dragon_fireball",
            EntityKind::WitherSkull => "wither_skull",
            EntityKind::TntMinecart => "tnt_minecart",
            EntityKind::ItemFrame => "item_frame",
            EntityKind::GlowItemFrame => "glow_item_frame",
            EntityKind::Painting => "painting",
            EntityKind::LeashKnot => "leash_knot",
            EntityKind::Arrow => "arrow",
            EntityKind::SpectralArrow => "spectral_arrow",
            EntityKind::Trident => "trident",
            EntityKind::Snowball => "snowball",
            EntityKind::Egg => "egg",
            EntityKind::Other(key) => key,
        }
    }

    /// Large, small and dragon fireballs and wither skulls
    pub fn is_fireball(&self) -> bool {
        matches!(
            self,
            EntityKind::Fireball
                | EntityKind::SmallFireball
                | EntityKind::DragonFireball
                | EntityKind::WitherSkull
        )
    }

    /// Entities attached to a block face
    pub fn is_hanging(&self) -> bool {
        matches!(
            self,
            EntityKind::ItemFrame
                | EntityKind::GlowItemFrame
                | EntityKind::Painting
                | EntityKind::LeashKnot
        )
    }

    /// Arrows, throwables and the fireball family
    pub fn is_projectile(&self) -> bool {
        self.is_fireball()
            || matches!(
                self,
                EntityKind::Arrow
                    | EntityKind::SpectralArrow
                    | EntityKind::Trident
                    | EntityKind::Snowball
                    | EntityKind::Egg
            )
    }

    pub fn is_item_frame(&self) -> bool {
        matches!(self, EntityKind::ItemFrame | EntityKind::GlowItemFrame)
    }

    /// Block-equivalent material of a hanging entity, if it has one
    pub fn hanging_material(&self) -> Option<Material> {
        match self {
            EntityKind::ItemFrame | EntityKind::GlowItemFrame | EntityKind::Painting => {
                Some(Material::new(self.key()))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// What fired a projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectileSource {
    /// A living shooter (player, skeleton, ghast, ...)
    Entity(Entity),
    /// A stationary launcher such as a dispenser
    Block(Block),
    /// Anything else the host could only name
    Other(String),
}

/// Snapshot of a live entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Identity, used as the entity-map key
    pub id: EntityId,
    /// Kind of entity
    pub kind: EntityKind,
    /// Display name (player name for players)
    pub name: String,
    /// Current position
    pub location: Location,
    /// Name of the current combat target, for creatures with one
    pub target: Option<String>,
    /// Shooter, for projectiles
    pub shooter: Option<Box<ProjectileSource>>,
    /// Name of whoever last damaged this entity
    pub last_damager: Option<String>,
    /// Whether the host treats this entity as invulnerable
    pub invulnerable: bool,
    /// Item displayed by an item frame
    pub item: Option<Material>,
}

impl Entity {
    /// Create a plain entity snapshot
    pub fn new(id: EntityId, kind: EntityKind, name: impl Into<String>, location: Location) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            location,
            target: None,
            shooter: None,
            last_damager: None,
            invulnerable: false,
            item: None,
        }
    }

    /// Create a player entity
    pub fn player(id: EntityId, name: impl Into<String>, location: Location) -> Self {
        Self::new(id, EntityKind::Player, name, location)
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_shooter(mut self, shooter: ProjectileSource) -> Self {
        self.shooter = Some(Box::new(shooter));
        self
    }

    pub fn with_last_damager(mut self, damager: impl Into<String>) -> Self {
        self.last_damager = Some(damager.into());
        self
    }

    pub fn with_item(mut self, item: Material) -> Self {
        self.item = Some(item);
        self
    }

    pub fn invulnerable(mut self) -> Self {
        self.invulnerable = true;
        self
    }

    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }

    /// Projectile kinds, or anything the host reports a shooter for
    pub fn is_projectile(&self) -> bool {
        self.kind.is_projectile() || self.shooter.is_some()
    }

    /// The player who fired this projectile, if any
    pub fn player_shooter(&self) -> Option<&Entity> {
        match self.shooter.as_deref() {
            Some(ProjectileSource::Entity(shooter)) if shooter.is_player() => Some(shooter),
            _ => None,
        }
    }

    /// Item frame holds nothing (or only air)
    pub fn holds_nothing(&self) -> bool {
        self.item.as_ref().map_or(true, Material::is_air)
    }
}

/// A player acting directly on the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Identity of the player entity
    pub id: EntityId,
    /// Player name
    pub name: String,
    /// Current position
    pub location: Location,
    /// Item in the main hand
    pub main_hand: Material,
    /// Item in the off hand
    pub off_hand: Material,
}

impl Player {
    /// Create an empty-handed player
    pub fn new(id: EntityId, name: impl Into<String>, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            main_hand: Material::air(),
            off_hand: Material::air(),
        }
    }

    pub fn holding(mut self, main_hand: Material) -> Self {
        self.main_hand = main_hand;
        self
    }

    pub fn holding_off_hand(mut self, off_hand: Material) -> Self {
        self.off_hand = off_hand;
        self
    }

    /// Item that would be placed by a use action: main hand first, then off hand
    pub fn item_to_place(&self) -> Option<&Material> {
        if !self.main_hand.is_air() {
            Some(&self.main_hand)
        } else if !self.off_hand.is_air() {
            Some(&self.off_hand)
        } else {
            None
        }
    }
}
