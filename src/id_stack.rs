//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::*;

impl Context {
    /// Pushes a string into the ID stack of the current window.
    pub fn push_id(&mut self, str_id: &str) {
        let w = self.current_window_mut();
        let id = w.get_id(str_id);
        w.id_stack.push(id);
    }

    /// Pushes an integer into the ID stack, for loops over indices.
    pub fn push_id_int(&mut self, int_id: i32) {
        let w = self.current_window_mut();
        let id = w.get_id_int(int_id);
        w.id_stack.push(id);
    }

    /// Pushes an opaque handle (an address, a key) into the ID stack.
    pub fn push_id_usize(&mut self, handle: usize) {
        let w = self.current_window_mut();
        let id = w.get_id_usize(handle);
        w.id_stack.push(id);
    }

    /// Pushes an already computed ID.
    pub fn push_override_id(&mut self, id: Id) { self.current_window_mut().id_stack.push(id); }

    /// Pops the last pushed ID.
    ///
    /// # Panics
    /// Panics when nothing was pushed in the current window.
    pub fn pop_id(&mut self) {
        let w = self.current_window_mut();
        assert!(w.id_stack.len() > 1, "pop_id() too many times in '{}'", w.name);
        w.id_stack.pop();
    }

    /// Calls `f` with `str_id` pushed, popping it afterwards.
    pub fn with_id<R>(&mut self, str_id: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_id(str_id);
        let res = f(self);
        self.pop_id();
        res
    }

    /// Calls `f` with `int_id` pushed, popping it afterwards.
    pub fn with_id_int<R>(&mut self, int_id: i32, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_id_int(int_id);
        let res = f(self);
        self.pop_id();
        res
    }

    /// ID of `str_id` in the current scope.
    pub fn get_id(&self, str_id: &str) -> Id { self.current_window_ref().get_id(str_id) }

    /// ID of `int_id` in the current scope.
    pub fn get_id_int(&self, int_id: i32) -> Id { self.current_window_ref().get_id_int(int_id) }

    /// ID of an opaque handle in the current scope.
    pub fn get_id_usize(&self, handle: usize) -> Id { self.current_window_ref().get_id_usize(handle) }

    /// Keeps the active and previously active IDs from being released when their widget is
    /// not submitted through [`Context::item_add`] this frame.
    pub fn keep_alive_id(&mut self, id: Id) {
        if self.active_id == id {
            self.active_id_is_alive = id;
        }
        if self.active_id_previous_frame == id {
            self.active_id_previous_frame_is_alive = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scoped_ids_differ_from_unscoped() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.window("W", WindowFlags::empty(), |ctx| {
                let plain = ctx.get_id("item");
                let scoped = ctx.with_id("row", |ctx| ctx.get_id("item"));
                let indexed = ctx.with_id_int(3, |ctx| ctx.get_id("item"));
                assert_ne!(plain, scoped);
                assert_ne!(plain, indexed);
                assert_ne!(scoped, indexed);
                assert_eq!(ctx.get_id("item"), plain);
                assert_eq!(ctx.get_id("Label###item"), ctx.get_id("Other###item"));
            });
        });
    }

    #[test]
    fn ids_are_stable_across_frames() {
        let mut ctx = Context::new_headless();
        let mut ids = Vec::new();
        for _ in 0..2 {
            ctx.frame(|ctx| {
                ctx.window("W", WindowFlags::empty(), |ctx| {
                    ctx.push_id_usize(0xdead_beef);
                    ids.push(ctx.get_id("x"));
                    ctx.pop_id();
                });
            });
        }
        assert_eq!(ids[0], ids[1]);
    }

    #[test]
    #[should_panic(expected = "pop_id() too many times")]
    fn popping_the_window_id_panics() {
        let mut ctx = Context::new_headless();
        ctx.new_frame();
        ctx.begin("W", WindowFlags::empty());
        ctx.pop_id();
    }

    #[test]
    #[should_panic]
    fn unbalanced_push_panics_at_end() {
        let mut ctx = Context::new_headless();
        ctx.new_frame();
        ctx.begin("W", WindowFlags::empty());
        ctx.push_id("left open");
        ctx.end();
    }

    proptest! {
        #[test]
        fn balanced_pushes_restore_stack_depth(n in 0usize..32) {
            let mut ctx = Context::new_headless();
            ctx.new_frame();
            ctx.begin("W", WindowFlags::empty());
            let w = ctx.get_current_window().unwrap();
            let before = ctx.get_window(w).id_stack_len();
            for i in 0..n {
                ctx.push_id_int(i as i32);
            }
            for _ in 0..n {
                ctx.pop_id();
            }
            prop_assert_eq!(ctx.get_window(w).id_stack_len(), before);
            ctx.end();
            ctx.render();
            prop_assert_eq!(ctx.get_window(w).id_stack_len(), 1);
        }
    }
}
