//! Scripted game trees for exercising search without a rules engine.
//!
//! Each node carries a material value. `piece_at` renders that value as
//! pawns on the lowest squares (light pawns for positive values, dark pawns
//! for negative), so the real material evaluator scores a node exactly as its
//! scripted value. Moves are node ids, listed in the order they were scripted.

use crate::game_state::chess_types::{Color, ColoredPiece, PieceKind, Square};
use crate::game_state::position::Position;

pub(crate) enum Tree {
    Leaf(i32),
    Node(i32, Vec<Tree>),
}

pub(crate) fn leaf(value: i32) -> Tree {
    Tree::Leaf(value)
}

pub(crate) fn node(value: i32, children: Vec<Tree>) -> Tree {
    Tree::Node(value, children)
}

struct ScriptedNode {
    value: i32,
    children: Vec<usize>,
}

pub(crate) struct ScriptedPosition {
    nodes: Vec<ScriptedNode>,
    root_side: Color,
    path: Vec<usize>,
    pub pushes: usize,
}

impl ScriptedPosition {
    pub(crate) fn new(root_side: Color, tree: Tree) -> Self {
        let mut nodes = Vec::new();
        flatten(tree, &mut nodes);
        Self {
            nodes,
            root_side,
            path: vec![0],
            pushes: 0,
        }
    }

    pub(crate) fn current(&self) -> usize {
        *self.path.last().unwrap_or(&0)
    }

    pub(crate) fn depth(&self) -> usize {
        self.path.len() - 1
    }
}

fn flatten(tree: Tree, nodes: &mut Vec<ScriptedNode>) -> usize {
    let id = nodes.len();
    match tree {
        Tree::Leaf(value) => nodes.push(ScriptedNode {
            value,
            children: Vec::new(),
        }),
        Tree::Node(value, subtrees) => {
            nodes.push(ScriptedNode {
                value,
                children: Vec::new(),
            });
            let children = subtrees
                .into_iter()
                .map(|sub| flatten(sub, nodes))
                .collect();
            nodes[id].children = children;
        }
    }
    id
}

impl Position for ScriptedPosition {
    type Move = usize;

    fn side_to_move(&self) -> Color {
        if self.depth() % 2 == 0 {
            self.root_side
        } else {
            self.root_side.opposite()
        }
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.nodes[self.current()].children.clone()
    }

    fn push(&mut self, mv: usize) {
        self.pushes += 1;
        self.path.push(mv);
    }

    fn pop(&mut self) -> Option<usize> {
        if self.path.len() > 1 {
            self.path.pop()
        } else {
            None
        }
    }

    fn is_terminal(&self) -> bool {
        self.nodes[self.current()].children.is_empty()
    }

    fn is_checkmate(&self) -> bool {
        false
    }

    fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        let value = self.nodes[self.current()].value;
        if (square as u32) >= value.unsigned_abs() {
            return None;
        }
        let color = if value > 0 { Color::Light } else { Color::Dark };
        Some(ColoredPiece::new(PieceKind::Pawn, color))
    }
}
