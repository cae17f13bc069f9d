/// Weights of source pixels whose contribution is lower than this value
/// are dropped.
const NEGLIGIBLE_WEIGHT: f32 = 1e-3;

/// Contribution of one source pixel into one destination pixel.
///
/// Both indexes are offsets of first component of pixel, i.e. they are
/// already multiplied by count of components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AreaTableItem {
    pub src_index: usize,
    pub dst_index: usize,
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Bound {
    pub start: usize,
    pub size: usize,
}

/// Weights of source pixels along one axis.
///
/// Items are stored in ascending order of destination index. Every
/// destination pixel owns one contiguous run of items, described by
/// the corresponding value in `bounds`.
#[derive(Debug, Clone, Default)]
pub(crate) struct AreaTable {
    pub items: Vec<AreaTableItem>,
    pub bounds: Vec<Bound>,
}

/// Items of the table that contribute into one destination pixel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AreaGroup<'a> {
    pub dst_index: usize,
    pub items: &'a [AreaTableItem],
}

impl AreaTable {
    pub fn groups(&self) -> impl Iterator<Item = AreaGroup<'_>> {
        self.bounds.iter().map(|bound| {
            let items = &self.items[bound.start..bound.start + bound.size];
            AreaGroup {
                dst_index: items.first().map_or(0, |item| item.dst_index),
                items,
            }
        })
    }
}

/// Computes weights of source pixels for every destination pixel
/// along one axis.
///
/// Destination pixel `i` covers the source interval
/// `[i * factor, (i + 1) * factor)`. Source pixels that lie entirely
/// inside of this interval get identical weights, pixels cut by the
/// interval boundaries get weights proportional to the covered part.
///
/// `src_size` must be greater or equal to `dst_size` and `dst_size`
/// must be greater than zero.
pub(crate) fn compute_area_table(src_size: u32, dst_size: u32, stride: usize) -> AreaTable {
    if dst_size == 0 || src_size < dst_size {
        return AreaTable::default();
    }
    let factor = src_size as f32 / dst_size as f32;
    let last_src_index = src_size as usize - 1;
    // Every destination pixel is covered by at most `ceil(factor) + 1`
    // source pixels.
    let max_items = (factor.ceil() as usize + 1) * dst_size as usize;
    let mut items: Vec<AreaTableItem> = Vec::with_capacity(max_items);
    let mut bounds: Vec<Bound> = Vec::with_capacity(dst_size as usize);

    for i in 0..dst_size as usize {
        let cell_start = i as f32 * factor;
        let cell_end = cell_start + factor;
        let cell_width = factor.min(src_size as f32 - cell_start);

        // Full source pixels of the cell are in range [first_full, last_full)
        let last_full = (cell_end.floor() as usize).min(last_src_index);
        let first_full = (cell_start.ceil() as usize).min(last_full);

        let dst_index = i * stride;
        let bound_start = items.len();
        let mut push = |src: usize, alpha: f32| {
            items.push(AreaTableItem {
                src_index: src * stride,
                dst_index,
                alpha,
            });
        };

        let leading = first_full as f32 - cell_start;
        if leading > NEGLIGIBLE_WEIGHT {
            push(first_full - 1, leading / cell_width);
        }
        let alpha = 1. / cell_width;
        for src in first_full..last_full {
            push(src, alpha);
        }
        let trailing = cell_end - last_full as f32;
        if trailing > NEGLIGIBLE_WEIGHT {
            push(last_full, trailing / cell_width);
        }

        bounds.push(Bound {
            start: bound_start,
            size: items.len() - bound_start,
        });
    }

    AreaTable { items, bounds }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums_of_alpha(table: &AreaTable) -> Vec<f32> {
        table
            .groups()
            .map(|group| group.items.iter().map(|item| item.alpha).sum())
            .collect()
    }

    #[test]
    fn table_10_to_4() {
        let table = compute_area_table(10, 4, 3);
        let dst_indexes: Vec<usize> = table.groups().map(|g| g.dst_index).collect();
        assert_eq!(dst_indexes, [0, 3, 6, 9]);
        for sum in sums_of_alpha(&table) {
            assert!((sum - 1.).abs() < 1e-3, "sum of weights is {sum}");
        }

        let first_group = table.groups().next().unwrap();
        let first: Vec<(usize, f32)> = first_group
            .items
            .iter()
            .map(|item| (item.src_index, item.alpha))
            .collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].0, 0);
        assert_eq!(first[1].0, 3);
        assert_eq!(first[2].0, 6);
        assert!((first[0].1 - 0.4).abs() < 1e-6);
        assert!((first[1].1 - 0.4).abs() < 1e-6);
        assert!((first[2].1 - 0.2).abs() < 1e-6);

        let last_group = table.groups().last().unwrap();
        let last: Vec<usize> = last_group
            .items
            .iter()
            .map(|item| item.src_index / 3)
            .collect();
        assert_eq!(last, [7, 8, 9]);
    }

    #[test]
    fn items_are_ordered() {
        let table = compute_area_table(37, 11, 1);
        for pair in table.items.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.dst_index < b.dst_index || a.src_index < b.src_index);
            assert!(a.dst_index <= b.dst_index);
        }
        for group in table.groups() {
            assert!(group.items.iter().all(|item| item.dst_index == group.dst_index));
        }
    }

    #[test]
    fn weights_sum_to_one() {
        for src_size in 1..60 {
            for dst_size in 1..=src_size {
                let table = compute_area_table(src_size, dst_size, 2);
                assert_eq!(table.bounds.len(), dst_size as usize);
                for (i, sum) in sums_of_alpha(&table).into_iter().enumerate() {
                    assert!(
                        (sum - 1.).abs() < 1e-3,
                        "{src_size} -> {dst_size}: sum of weights of pixel {i} is {sum}"
                    );
                }
                let max_src = (src_size as usize - 1) * 2;
                assert!(table.items.iter().all(|item| item.src_index <= max_src));
                assert!(table
                    .items
                    .iter()
                    .all(|item| item.alpha > 0. && item.alpha <= 1. + 1e-4));
            }
        }
    }

    #[test]
    fn same_size_is_identity() {
        let table = compute_area_table(5, 5, 1);
        let pairs: Vec<(usize, usize)> = table
            .items
            .iter()
            .map(|item| (item.dst_index, item.src_index))
            .collect();
        assert_eq!(pairs, [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert!(table.items.iter().all(|item| item.alpha == 1.));
    }

    #[test]
    fn upscale_gives_empty_table() {
        let table = compute_area_table(3, 5, 1);
        assert!(table.items.is_empty());
        assert!(table.bounds.is_empty());
    }
}
