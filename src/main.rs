#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::error::Error;
use std::io::BufRead;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Cube {
    x: i32,
    y: i32,
    z: i32,
}

const SIDES: [Cube; 6] = [
    Cube { x: 1, y: 0, z: 0 },
    Cube { x: -1, y: 0, z: 0 },
    Cube { x: 0, y: 1, z: 0 },
    Cube { x: 0, y: -1, z: 0 },
    Cube { x: 0, y: 0, z: 1 },
    Cube { x: 0, y: 0, z: -1 },
];

impl Cube {
    fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    fn neighbors(self) -> [Cube; 6] {
        SIDES.map(|d| Cube::new(self.x + d.x, self.y + d.y, self.z + d.z))
    }
}

fn read_cubes(r: impl BufRead) -> Result<HashSet<Cube>, Box<dyn Error>> {
    let line_re = Lazy::new(|| Regex::new(r#"^(-?\d+),(-?\d+),(-?\d+)$"#).unwrap());
    let mut cubes: HashSet<Cube> = HashSet::new();
    for line in r.lines() {
        let line = line?;
        let Some(caps) = line_re.captures(&line) else {
            return Err(format!("unexpected line format: {line}").into());
        };
        let coords: Vec<i32> = caps.iter().skip(1)
            .map(|s| s.unwrap().as_str().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()?;
        cubes.insert(Cube::new(coords[0], coords[1], coords[2]));
    }
    Ok(cubes)
}

// Count faces with no cube on the other side, including faces on the inside
// of sealed air pockets.
fn surface_area(cubes: &HashSet<Cube>) -> usize {
    cubes.iter()
        .flat_map(|c| c.neighbors())
        .filter(|n| !cubes.contains(n))
        .count()
}

// For each plane, the sorted third coordinates of every cube projecting onto
// each plane position. Lets the enclosure search ask "is there a cube on both
// sides of this point along every axis" with a binary search instead of
// walking the grid.
struct Axes {
    xy: HashMap<(i32, i32), Vec<i32>>,
    xz: HashMap<(i32, i32), Vec<i32>>,
    yz: HashMap<(i32, i32), Vec<i32>>,
}

impl Axes {
    fn new(cubes: &HashSet<Cube>) -> Self {
        let mut axes = Axes {
            xy: HashMap::new(),
            xz: HashMap::new(),
            yz: HashMap::new(),
        };
        for c in cubes {
            axes.xy.entry((c.x, c.y)).or_default().push(c.z);
            axes.xz.entry((c.x, c.z)).or_default().push(c.y);
            axes.yz.entry((c.y, c.z)).or_default().push(c.x);
        }
        let planes = axes.xy.values_mut()
            .chain(axes.xz.values_mut())
            .chain(axes.yz.values_mut());
        for positions in planes {
            positions.sort_unstable();
        }
        axes
    }

    // Whether there's at least one cube strictly below and strictly above p
    // on all three axes, possibly with empty space in between. Failing on any
    // axis means p can escape to infinity along it.
    fn bounds(&self, p: Cube) -> bool {
        let projections = [
            (&self.xy, (p.x, p.y), p.z),
            (&self.xz, (p.x, p.z), p.y),
            (&self.yz, (p.y, p.z), p.x),
        ];
        projections.into_iter().all(|(plane, key, pos)| {
            let Some(positions) = plane.get(&key) else {
                return false;
            };
            let i = positions.partition_point(|&v| v < pos);
            i != 0 && i != positions.len()
        })
    }
}

// Breadth-first search outward from start through empty space. If the queue
// drains with every point bounded on all three axes, the whole searched
// region is sealed and gets returned; one unbounded point proves the region
// leaks to the outside, and nothing is kept. Starting on an already-enclosed
// point returns an empty region without searching.
fn enclosed_region(start: Cube, enclosed: &HashSet<Cube>, axes: &Axes) -> Option<HashSet<Cube>> {
    if enclosed.contains(&start) {
        return Some(HashSet::new());
    }
    let mut to_check: VecDeque<Cube> = VecDeque::from([start]);
    let mut checked: HashSet<Cube> = HashSet::from([start]);
    while let Some(p) = to_check.pop_front() {
        if !axes.bounds(p) {
            return None;
        }
        for n in p.neighbors() {
            if !enclosed.contains(&n) && !checked.contains(&n) {
                to_check.push_back(n);
                checked.insert(n);
            }
        }
    }
    Some(checked)
}

// Count faces touching outside air. Lava cubes count as enclosed so that
// cube-to-cube faces and pocket faces both drop out of the final count.
fn exterior_surface_area(cubes: &HashSet<Cube>) -> usize {
    let axes = Axes::new(cubes);
    let mut enclosed: HashSet<Cube> = cubes.clone();
    for c in cubes {
        for n in c.neighbors() {
            if let Some(region) = enclosed_region(n, &enclosed, &axes) {
                enclosed.extend(region);
            }
        }
    }
    cubes.iter()
        .flat_map(|c| c.neighbors())
        .filter(|n| !enclosed.contains(n))
        .count()
}

fn part1(r: impl BufRead) -> Result<usize, Box<dyn Error>> {
    Ok(surface_area(&read_cubes(r)?))
}

fn part2(r: impl BufRead) -> Result<usize, Box<dyn Error>> {
    Ok(exterior_surface_area(&read_cubes(r)?))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cubes = read_cubes(std::io::stdin().lock())?;
    println!("Part 1: {}", surface_area(&cubes));
    println!("Part 2: {}", exterior_surface_area(&cubes));
    Ok(())
}
