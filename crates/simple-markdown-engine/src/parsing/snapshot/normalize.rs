use serde::Serialize;

use crate::parsing::blocks::{Block, Child};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub text: String,
}

pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            kind: b.kind().name().to_string(),
            text: b
                .content()
                .iter()
                .map(|c| match c {
                    Child::Text(t) => t.clone(),
                    Child::Block(inner) => format!("<{}>", inner.kind().name()),
                })
                .collect::<Vec<_>>()
                .join(""),
        })
        .collect();

    Snap { blocks }
}
