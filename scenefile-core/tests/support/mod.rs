#![allow(dead_code)]

use std::sync::Arc;

use scenefile_core::{HierarchyContext, HierarchyLayout, InMemoryAuthority};

/// A job with production scenes, an ignored admin scene and ignored support
/// folders next to the shots.
pub fn santa_authority() -> Arc<InMemoryAuthority> {
    Arc::new(
        InMemoryAuthority::new()
            .with_path("macysSanta/build/char_santa_balloon")
            .with_path("macysSanta/build/prop_sleigh")
            .with_path("macysSanta/build/tools")
            .with_path("macysSanta/shots/sh010")
            .with_path("macysSanta/shots/sh020")
            .with_path("macysSanta/shots/nuke_template")
            .with_path("macysSanta/empty_scene")
            .with_path("macysSanta/pantry/old_stuff")
            .with_path("macysSanta/reference/refs")
            .with_path("sourPatch/build/char_spk_amputee"),
    )
}

pub fn context_at(authority: &Arc<InMemoryAuthority>, path: &str) -> HierarchyContext {
    HierarchyContext::from_path(path, authority.clone(), HierarchyLayout::default())
}
