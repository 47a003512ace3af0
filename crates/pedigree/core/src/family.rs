//! Family position resolution.
//!
//! A subject's affinity and inheritance depend on its two parents and four
//! grandparents. Their slots follow from the binary indexing law: position `P`
//! on level `L` has parents `2P-1` (left) and `2P` (right) on level `L+1`.

use crate::tree::TreeCoord;

/// Which parent line an ancestor belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Relation of an ancestor to the subject within one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Relation {
    Parent,
    Grandparent1,
    Grandparent2,
}

/// The parent and two grandparents on one side of the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCoords {
    pub parent: TreeCoord,
    pub grandparent1: TreeCoord,
    pub grandparent2: TreeCoord,
}

impl LineCoords {
    fn from_parent(parent: TreeCoord) -> Self {
        Self {
            parent,
            grandparent1: parent.left_parent(),
            grandparent2: parent.right_parent(),
        }
    }

    pub fn get(&self, relation: Relation) -> TreeCoord {
        match relation {
            Relation::Parent => self.parent,
            Relation::Grandparent1 => self.grandparent1,
            Relation::Grandparent2 => self.grandparent2,
        }
    }
}

/// The six slots that influence a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyPositions {
    pub left: LineCoords,
    pub right: LineCoords,
}

impl FamilyPositions {
    pub fn side(&self, side: Side) -> &LineCoords {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// All six slots with their side and relation, parents first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, Relation, TreeCoord)> + '_ {
        [Side::Left, Side::Right].into_iter().flat_map(move |side| {
            [Relation::Parent, Relation::Grandparent1, Relation::Grandparent2]
                .into_iter()
                .map(move |relation| (side, relation, self.side(side).get(relation)))
        })
    }
}

/// Resolves the family slots of `coord`.
///
/// Returns `None` for the unset sentinel (zero level or position). Coordinates
/// past the tree's bounds still resolve; their slots simply hold nobody.
pub fn resolve_family_positions(coord: TreeCoord) -> Option<FamilyPositions> {
    if coord.is_unset() {
        return None;
    }

    Some(FamilyPositions {
        left: LineCoords::from_parent(coord.left_parent()),
        right: LineCoords::from_parent(coord.right_parent()),
    })
}
