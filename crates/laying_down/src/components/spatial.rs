//! Spatial parent: к чему entity прикреплён в мире (grid, контейнер, руки)

use bevy::prelude::*;

/// Пространственный родитель entity
///
/// - `parent`: непосредственный родитель (grid, контейнер, entity который держит)
/// - `grid`: поверхность (grid) под entity, если entity стоит/лежит на ней
///
/// "На поверхности" ⇔ `grid.is_some()`. Entity без компонента считается НЕ на поверхности.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SpatialParent {
    pub parent: Option<Entity>,
    pub grid: Option<Entity>,

    /// Родитель до последнего `set_parent` (для ParentChanged события)
    previous_parent: Option<Entity>,
}

impl SpatialParent {
    /// Стоит прямо на grid
    pub fn on_grid(grid: Entity) -> Self {
        Self {
            parent: Some(grid),
            grid: Some(grid),
            previous_parent: None,
        }
    }

    /// Висит в пустоте (space, nullspace)
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn on_surface(&self) -> bool {
        self.grid.is_some()
    }

    pub fn previous_parent(&self) -> Option<Entity> {
        self.previous_parent
    }

    /// Сменить родителя. `grid` — поверхность под новым родителем (None для рук/контейнера/космоса).
    pub fn set_parent(&mut self, parent: Option<Entity>, grid: Option<Entity>) {
        self.previous_parent = self.parent;
        self.parent = parent;
        self.grid = grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_grid_is_surface() {
        let grid = Entity::from_raw(7);
        let spatial = SpatialParent::on_grid(grid);
        assert!(spatial.on_surface());
        assert_eq!(spatial.parent, Some(grid));
    }

    #[test]
    fn test_picked_up_leaves_surface() {
        let grid = Entity::from_raw(7);
        let holder = Entity::from_raw(8);
        let mut spatial = SpatialParent::on_grid(grid);

        spatial.set_parent(Some(holder), None);

        assert!(!spatial.on_surface());
        assert_eq!(spatial.parent, Some(holder));
        assert_eq!(spatial.previous_parent(), Some(grid));
    }

    #[test]
    fn test_detached_is_not_surface() {
        assert!(!SpatialParent::detached().on_surface());
    }
}
