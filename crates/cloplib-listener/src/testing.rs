//! In-memory platform and recording handler for listener tests.

use std::sync::{Arc, LazyLock, Mutex};

use cloplib_handler::{Handler, SpecialTypeChecker, TypeChecker};
use cloplib_operation::{Operation, Position, User, World};
use uuid::Uuid;

use crate::listener::OperationListener;
use crate::platform::{BlockTraits, EntityTraits, Platform, Shooter};

static WORLD: LazyLock<Arc<World>> =
    LazyLock::new(|| Arc::new(World::new("world", Uuid::from_u128(0xC1A1))));

pub fn pos(x: f64, y: f64, z: f64) -> Position {
    Position::new(x, y, z, Arc::clone(&WORLD))
}

// ---------------------------------------------------------------------------
// Entities and blocks
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct MockEntity {
    pub user: Option<User>,
    pub npc: bool,
    pub projectile: Option<Shooter<Box<MockEntity>, MockBlock>>,
    pub passengers: Vec<MockEntity>,
    pub hostile: bool,
    pub traits: EntityTraits,
    pub position: Option<Position>,
    pub type_id: String,
    pub in_vehicle: bool,
}

impl MockEntity {
    pub fn player(name: &str, id: u128) -> Self {
        let position = pos(0.5, 64.0, 0.5);
        Self {
            user: Some(User::new(name, Uuid::from_u128(id), position.clone())),
            traits: EntityTraits {
                living: true,
                ..Default::default()
            },
            position: Some(position),
            type_id: "minecraft:player".to_string(),
            ..Default::default()
        }
    }

    pub fn npc(name: &str, id: u128) -> Self {
        Self {
            npc: true,
            ..Self::player(name, id)
        }
    }

    pub fn mob(type_id: &str, hostile: bool) -> Self {
        Self {
            hostile,
            traits: EntityTraits {
                mob: true,
                living: true,
                ..Default::default()
            },
            position: Some(pos(3.5, 64.0, 3.5)),
            type_id: type_id.to_string(),
            ..Default::default()
        }
    }

    pub fn projectile(shooter: Shooter<Box<MockEntity>, MockBlock>) -> Self {
        Self {
            projectile: Some(shooter),
            position: Some(pos(2.5, 65.0, 2.5)),
            type_id: "minecraft:arrow".to_string(),
            ..Default::default()
        }
    }

    pub fn with_traits(mut self, traits: EntityTraits) -> Self {
        self.traits = traits;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.user = self
            .user
            .take()
            .map(|user| User::new(user.name(), user.uuid(), position.clone()));
        self.position = Some(position);
        self
    }

    pub fn riding(mut self) -> Self {
        self.in_vehicle = true;
        self
    }

    pub fn carrying(mut self, passenger: MockEntity) -> Self {
        self.passengers.push(passenger);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct MockBlock {
    pub material: String,
    pub position: Option<Position>,
    pub traits: BlockTraits,
}

impl MockBlock {
    pub fn new(material: &str, x: i32, y: i32, z: i32) -> Self {
        Self {
            material: material.to_string(),
            position: Some(Position::of_block(glam::IVec3::new(x, y, z), Arc::clone(&WORLD))),
            traits: BlockTraits::default(),
        }
    }

    pub fn with_traits(mut self, traits: BlockTraits) -> Self {
        self.traits = traits;
        self
    }

    /// A block whose world could not be resolved.
    pub fn unplaced(material: &str) -> Self {
        Self {
            material: material.to_string(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MockPlatform {
    /// What every raycast hits.
    pub target: Option<Position>,
}

impl Platform for MockPlatform {
    type Entity = MockEntity;
    type Block = MockBlock;

    fn as_user(&self, entity: &MockEntity) -> Option<User> {
        entity.user.clone()
    }

    fn is_npc(&self, player: &MockEntity) -> bool {
        player.npc
    }

    fn shooter(&self, entity: &MockEntity) -> Option<Shooter<MockEntity, MockBlock>> {
        entity.projectile.clone().map(|shooter| match shooter {
            Shooter::Entity(entity) => Shooter::Entity(*entity),
            Shooter::Block(block) => Shooter::Block(block),
            Shooter::Unknown => Shooter::Unknown,
        })
    }

    fn passengers(&self, entity: &MockEntity) -> Vec<MockEntity> {
        entity.passengers.clone()
    }

    fn is_hostile(&self, entity: &MockEntity) -> bool {
        entity.hostile
    }

    fn entity_traits(&self, entity: &MockEntity) -> EntityTraits {
        entity.traits
    }

    fn entity_position(&self, entity: &MockEntity) -> Option<Position> {
        entity.position.clone()
    }

    fn entity_type_id(&self, entity: &MockEntity) -> String {
        entity.type_id.clone()
    }

    fn is_inside_vehicle(&self, player: &MockEntity) -> bool {
        player.in_vehicle
    }

    fn block_position(&self, block: &MockBlock) -> Option<Position> {
        block.position.clone()
    }

    fn block_material(&self, block: &MockBlock) -> String {
        block.material.clone()
    }

    fn block_traits(&self, block: &MockBlock) -> BlockTraits {
        block.traits
    }

    fn target_block(&self, _player: &MockEntity, _max_distance: u32) -> Option<Position> {
        self.target.clone()
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

type OperationVeto = Box<dyn Fn(&Operation) -> bool + Send + Sync>;
type PairVeto = Box<dyn Fn(&Position, &Position) -> bool + Send + Sync>;

/// Records every query and answers with configurable vetoes.
pub struct RecordingHandler {
    checker: SpecialTypeChecker,
    operation_veto: OperationVeto,
    movement_veto: PairVeto,
    nature_veto: PairVeto,
    pub operations: Mutex<Vec<Operation>>,
    pub movements: Mutex<Vec<(Position, Position)>>,
    pub natures: Mutex<Vec<(Position, Position)>>,
}

impl RecordingHandler {
    pub fn allowing() -> Self {
        Self {
            checker: SpecialTypeChecker::bundled().unwrap(),
            operation_veto: Box::new(|_: &Operation| false),
            movement_veto: Box::new(|_: &Position, _: &Position| false),
            nature_veto: Box::new(|_: &Position, _: &Position| false),
            operations: Mutex::new(Vec::new()),
            movements: Mutex::new(Vec::new()),
            natures: Mutex::new(Vec::new()),
        }
    }

    pub fn vetoing(veto: impl Fn(&Operation) -> bool + Send + Sync + 'static) -> Self {
        Self {
            operation_veto: Box::new(veto),
            ..Self::allowing()
        }
    }

    pub fn vetoing_movement(
        veto: impl Fn(&Position, &Position) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            movement_veto: Box::new(veto),
            ..Self::allowing()
        }
    }

    pub fn vetoing_nature(
        veto: impl Fn(&Position, &Position) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            nature_veto: Box::new(veto),
            ..Self::allowing()
        }
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }

    /// Minimal-string type names of every checked operation, in order.
    pub fn types(&self) -> Vec<String> {
        self.operations()
            .iter()
            .map(|op| op.operation_type().as_minimal_string())
            .collect()
    }

    pub fn last(&self) -> Operation {
        self.operations().pop().expect("no operation was checked")
    }

    pub fn movement_calls(&self) -> usize {
        self.movements.lock().unwrap().len()
    }

    pub fn nature_calls(&self) -> Vec<(Position, Position)> {
        self.natures.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        let operations = self.operations.lock().unwrap().len();
        let natures = self.natures.lock().unwrap().len();
        operations + self.movement_calls() + natures
    }
}

impl Handler for RecordingHandler {
    fn cancel_operation(&self, operation: &Operation) -> bool {
        self.operations.lock().unwrap().push(operation.clone());
        (self.operation_veto)(operation)
    }

    fn cancel_movement(&self, _user: &User, from: &Position, to: &Position) -> bool {
        self.movements
            .lock()
            .unwrap()
            .push((from.clone(), to.clone()));
        (self.movement_veto)(from, to)
    }

    fn cancel_nature(&self, _world: &World, source: &Position, target: &Position) -> bool {
        self.natures
            .lock()
            .unwrap()
            .push((source.clone(), target.clone()));
        (self.nature_veto)(source, target)
    }

    fn type_checker(&self) -> &dyn TypeChecker {
        &self.checker
    }
}

pub type TestListener = OperationListener<MockPlatform, RecordingHandler>;

pub fn listener(handler: RecordingHandler) -> TestListener {
    OperationListener::new(MockPlatform::default(), Arc::new(handler))
}

pub fn listener_targeting(handler: RecordingHandler, target: Position) -> TestListener {
    let platform = MockPlatform {
        target: Some(target),
    };
    OperationListener::new(platform, Arc::new(handler))
}
